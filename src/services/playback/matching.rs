use tracing::{debug, instrument, warn};

use super::{ItemId, PlaybackError, Provider, traits::ImportCatalog};

/// Find the first provider whose catalog holds an item imported under `item_id`.
///
/// Providers are scanned in registration order and the first one with at
/// least one matching item wins. Several matches within one catalog are
/// logged but still select that provider; which duplicate matched does not
/// matter since the remote lookup is keyed by id. A provider whose catalog
/// cannot be read is skipped.
#[instrument(skip(catalog, providers), fields(providers = providers.len()))]
pub(crate) async fn find_provider(
    catalog: &dyn ImportCatalog,
    providers: &[Provider],
    protocol: &str,
    item_id: ItemId,
    file: &str,
) -> Option<Provider> {
    let wanted = item_id.to_string();

    for provider in providers {
        let items = match catalog.imported_items(provider).await {
            Ok(items) => items,
            Err(source) => {
                let err = PlaybackError::CatalogUnavailable {
                    provider: provider.id.clone(),
                    source,
                };
                warn!("{err}");
                continue;
            }
        };

        let matching = items
            .iter()
            .filter(|item| item.unique_id(protocol) == Some(wanted.as_str()))
            .count();

        match matching {
            0 => continue,
            1 => debug!("Matched item {} on {}", item_id, provider),
            count => warn!(
                "{} items imported from {} match the remote item {} playing from {}",
                count, provider, item_id, file
            ),
        }

        return Some(provider.clone());
    }

    None
}
