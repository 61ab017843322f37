//! Voucher Model

use serde::{Deserialize, Serialize};

/// Voucher entity. A row existing for a code is the only validity signal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct Voucher {
    pub code: String,
    pub discount_percentage: i32,
}

/// Voucher attached to an order
///
/// "No voucher" and "voucher with its discount" are distinct variants, so an
/// empty code can never carry a non-zero discount.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AppliedVoucher {
    #[default]
    None,
    Code {
        code: String,
        discount_percentage: i32,
    },
}

impl AppliedVoucher {
    /// Code as surfaced to clients (`""` when there is no voucher)
    pub fn code(&self) -> &str {
        match self {
            Self::None => "",
            Self::Code { code, .. } => code,
        }
    }

    /// Code as persisted (`NULL` when there is no voucher)
    pub fn stored_code(&self) -> Option<&str> {
        match self {
            Self::None => None,
            Self::Code { code, .. } => Some(code),
        }
    }

    pub fn discount_percentage(&self) -> i32 {
        match self {
            Self::None => 0,
            Self::Code {
                discount_percentage,
                ..
            } => *discount_percentage,
        }
    }
}

impl From<Voucher> for AppliedVoucher {
    fn from(v: Voucher) -> Self {
        Self::Code {
            code: v.code,
            discount_percentage: v.discount_percentage,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_voucher_is_zero_discount() {
        let v = AppliedVoucher::None;
        assert_eq!(v.code(), "");
        assert_eq!(v.stored_code(), None);
        assert_eq!(v.discount_percentage(), 0);
    }

    #[test]
    fn test_from_voucher() {
        let v = AppliedVoucher::from(Voucher {
            code: "SAVE10".into(),
            discount_percentage: 10,
        });
        assert_eq!(v.code(), "SAVE10");
        assert_eq!(v.stored_code(), Some("SAVE10"));
        assert_eq!(v.discount_percentage(), 10);
    }
}
