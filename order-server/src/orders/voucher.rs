//! Voucher code resolution

use std::sync::Arc;

use shared::models::AppliedVoucher;
use thiserror::Error;

use super::store::VoucherCatalog;
use crate::db::repository::RepoError;

#[derive(Debug, Error)]
pub enum VoucherError {
    /// Non-empty code with no matching voucher
    #[error("unknown voucher code '{0}'")]
    Invalid(String),

    #[error("voucher lookup failed: {0}")]
    Lookup(#[from] RepoError),
}

/// Turns a client-supplied voucher code into the discount it grants
#[derive(Clone)]
pub struct VoucherResolver {
    catalog: Arc<dyn VoucherCatalog>,
}

impl VoucherResolver {
    pub fn new(catalog: Arc<dyn VoucherCatalog>) -> Self {
        Self { catalog }
    }

    /// Empty code means no voucher and never touches the catalog. Codes are
    /// matched exactly, case and whitespace included.
    pub async fn resolve(&self, code: &str) -> Result<AppliedVoucher, VoucherError> {
        if code.is_empty() {
            return Ok(AppliedVoucher::None);
        }

        match self.catalog.find_by_code(code).await? {
            Some(voucher) => Ok(voucher.into()),
            None => Err(VoucherError::Invalid(code.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orders::fake_store::FakeStore;

    fn resolver(store: &Arc<FakeStore>) -> VoucherResolver {
        VoucherResolver::new(store.clone())
    }

    #[tokio::test]
    async fn test_empty_code_skips_lookup() {
        let store = Arc::new(FakeStore::default());
        let applied = resolver(&store).resolve("").await.unwrap();
        assert_eq!(applied, AppliedVoucher::None);
        assert_eq!(store.voucher_lookups(), 0);
    }

    #[tokio::test]
    async fn test_known_code_yields_discount() {
        let store = Arc::new(FakeStore::default().with_voucher("SAVE10", 10));
        let applied = resolver(&store).resolve("SAVE10").await.unwrap();
        assert_eq!(applied.code(), "SAVE10");
        assert_eq!(applied.discount_percentage(), 10);
        assert_eq!(store.voucher_lookups(), 1);
    }

    #[tokio::test]
    async fn test_unknown_code_is_invalid() {
        let store = Arc::new(FakeStore::default().with_voucher("SAVE10", 10));
        let err = resolver(&store).resolve("NOPE").await.unwrap_err();
        assert!(matches!(err, VoucherError::Invalid(code) if code == "NOPE"));
    }

    #[tokio::test]
    async fn test_match_is_exact() {
        let store = Arc::new(FakeStore::default().with_voucher("SAVE10", 10));
        for code in ["save10", " SAVE10", "SAVE10 "] {
            let err = resolver(&store).resolve(code).await.unwrap_err();
            assert!(matches!(err, VoucherError::Invalid(_)), "{code:?}");
        }
    }

    #[tokio::test]
    async fn test_lookup_failure_is_not_invalid() {
        let store = Arc::new(FakeStore::default().failing());
        let err = resolver(&store).resolve("SAVE10").await.unwrap_err();
        assert!(matches!(err, VoucherError::Lookup(_)));
    }
}
