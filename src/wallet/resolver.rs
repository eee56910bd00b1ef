//! Active-wallet resolution.

use super::model::{ChainType, Wallet};

/// Pick the single wallet the flow should target.
///
/// A wallet created in this session wins unconditionally over anything the
/// provider lists, which covers the window where the provider's wallet list
/// has not yet caught up with a just-created wallet. Otherwise the first
/// listed wallet matching `chain` is used. Pure function: no side effects,
/// identical inputs give identical output.
pub fn resolve_active(
    known: &[Wallet],
    recently_created: Option<&Wallet>,
    chain: ChainType,
) -> Option<Wallet> {
    if let Some(wallet) = recently_created {
        return Some(wallet.clone());
    }

    known.iter().find(|w| w.chain_type == chain).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wallet(id: &str) -> Wallet {
        Wallet {
            id: id.to_string(),
            address: format!("G{}", id.to_uppercase()),
            chain_type: ChainType::Stellar,
        }
    }

    #[test]
    fn test_recently_created_takes_precedence() {
        let known = vec![wallet("listed-1"), wallet("listed-2")];
        let recent = wallet("fresh");

        let resolved = resolve_active(&known, Some(&recent), ChainType::Stellar);
        assert_eq!(resolved.unwrap().id, "fresh");
    }

    #[test]
    fn test_first_matching_listed_wallet_is_used() {
        let known = vec![wallet("listed-1"), wallet("listed-2")];

        let resolved = resolve_active(&known, None, ChainType::Stellar);
        assert_eq!(resolved.unwrap().id, "listed-1");
    }

    #[test]
    fn test_no_wallet_resolves_to_none() {
        assert_eq!(resolve_active(&[], None, ChainType::Stellar), None);
    }

    #[test]
    fn test_resolution_is_idempotent() {
        let known = vec![wallet("listed-1")];
        let recent = wallet("fresh");

        let first = resolve_active(&known, Some(&recent), ChainType::Stellar);
        let second = resolve_active(&known, Some(&recent), ChainType::Stellar);
        assert_eq!(first, second);
    }
}
