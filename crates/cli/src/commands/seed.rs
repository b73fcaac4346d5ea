//! Seed the storefront database with demo stores and products.
//!
//! Stores are created through the same `add_store` action the API uses, so
//! names are validated and slugs derived the usual way. Existing demo stores
//! are not recreated, but any of their demo products that are missing get
//! added, which makes the command safe to re-run after a partial failure.

use skateshop_storefront::db::{self, ProductRepository, StoreRepository};
use skateshop_storefront::{ActionError, RawCreateStoreInput, Revalidate, add_store};
use skateshop_core::StoreName;
use tracing::{info, warn};

use super::{CommandError, database_url};

/// Default owner of the demo stores.
pub const DEFAULT_OWNER: &str = "seed-user";

struct DemoStore {
    name: &'static str,
    description: &'static str,
    products: &'static [(&'static str, &'static str)],
}

const DEMO_STORES: &[DemoStore] = &[
    DemoStore {
        name: "Deck Lab",
        description: "Hand pressed maple decks",
        products: &[
            ("Birch Deck 8.0", "decks"),
            ("Maple Deck 8.25", "decks"),
            ("Grip Tape Sheet", "accessories"),
        ],
    },
    DemoStore {
        name: "Wheel House",
        description: "Wheels and bearings",
        products: &[
            ("Street Wheels 52mm", "wheels"),
            ("Cruiser Wheels 60mm", "wheels"),
            ("Bearing Set ABEC 7", "accessories"),
        ],
    },
    DemoStore {
        name: "Truck Stop",
        description: "Trucks and hardware",
        products: &[("Hollow Trucks 139", "trucks"), ("Mounting Bolts", "accessories")],
    },
    DemoStore {
        name: "Empty Lot",
        description: "Opening soon",
        products: &[],
    },
];

/// The CLI has no view cache; revalidation is only logged.
struct LogRevalidate;

impl Revalidate for LogRevalidate {
    fn revalidate_path(&self, path: &str) {
        info!(path, "View revalidated");
    }
}

/// Create the demo stores and their products.
///
/// # Errors
///
/// Returns an error if the database URL is missing, the connection fails, or
/// a store or product cannot be created.
pub async fn demo_stores(owner: &str) -> Result<(), CommandError> {
    let database_url = database_url()?;
    let pool = db::create_pool(&database_url).await?;
    info!("Connected to database");

    let stores = StoreRepository::new(&pool);
    let products = ProductRepository::new(&pool);
    let mut created = 0_usize;

    for demo in DEMO_STORES {
        let input = RawCreateStoreInput::new(demo.name, Some(demo.description), owner);

        match add_store(&pool, &LogRevalidate, input).await {
            Ok(()) => created += 1,
            Err(ActionError::DuplicateName(name)) => {
                info!(%name, "Store already exists, checking its products");
            }
            Err(e) => return Err(CommandError::Seed(e.to_string())),
        }

        let name = StoreName::parse(demo.name).map_err(|e| CommandError::Seed(e.to_string()))?;
        let store = stores
            .get_by_name(&name)
            .await
            .map_err(|e| CommandError::Seed(e.to_string()))?
            .ok_or_else(|| CommandError::Seed(format!("store {name} vanished after insert")))?;

        if store.user_id != owner {
            warn!(store = %store.name, owner = %store.user_id, "Store belongs to another user, skipping");
            continue;
        }

        let existing = products
            .names_for_store(store.id)
            .await
            .map_err(|e| CommandError::Seed(e.to_string()))?;
        let missing = missing_products(demo.products, &existing);

        for (product_name, category) in &missing {
            products
                .create(store.id, product_name, category)
                .await
                .map_err(|e| CommandError::Seed(e.to_string()))?;
        }

        info!(store = %store.name, slug = %store.slug, added = missing.len(), "Seeded store");
    }

    info!(created, existing = DEMO_STORES.len() - created, "Seeding complete!");
    Ok(())
}

/// Demo products whose names are not among `existing`.
fn missing_products(
    products: &[(&'static str, &'static str)],
    existing: &[String],
) -> Vec<(&'static str, &'static str)> {
    products
        .iter()
        .filter(|(name, _)| !existing.iter().any(|have| have == name))
        .copied()
        .collect()
}
