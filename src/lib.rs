//! Language Content API
//!
//! Content backend for language-learning apps:
//! - Languages, course modules and practice sentences over REST
//! - Image content served from a cloud blob store through a cache-aside reader
//! - Named in-memory cache regions with explicit, region-wide invalidation

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use api::state::AppState;
use config::DatabaseBackend;
use domain::cache::{BLOBS, BLOB_EXISTENCE, LANGUAGES, MODULES, SENTENCES};
use domain::{
    BlobStore, Cache, CacheRegistry, InMemoryItemRepository, InMemoryLanguageRepository,
    InMemoryModuleRepository, InMemorySentenceRepository, Item, NewLanguage, NewModule,
    NewSentence,
};
use infrastructure::blob::{AzureBlobConfig, AzureBlobStore, CachedBlobReader};
use infrastructure::cache::{CacheFactory, InMemoryCacheConfig};
use infrastructure::item::PostgresItemRepository;
use infrastructure::language::PostgresLanguageRepository;
use infrastructure::module::PostgresModuleRepository;
use infrastructure::sentence::PostgresSentenceRepository;
use infrastructure::services::{ItemService, LanguageService, ModuleService, SentenceService};
use infrastructure::storage::{connect_pool, run_content_migrations, PostgresConfig};
use tracing::info;

/// Create the application state with all services initialized
pub async fn create_app_state() -> anyhow::Result<AppState> {
    create_app_state_with_config(&AppConfig::default()).await
}

/// Create the application state with custom configuration
///
/// Builds the cache registry, wires repositories into services, and
/// clears every cache region before the server starts taking requests.
pub async fn create_app_state_with_config(config: &AppConfig) -> anyhow::Result<AppState> {
    let cache_config = match config.cache.max_capacity {
        Some(capacity) => InMemoryCacheConfig::new().with_max_capacity(capacity),
        None => InMemoryCacheConfig::new(),
    };

    let registry = CacheFactory::new().create_registry(&cache_config);

    // Every region starts cleared at boot
    registry.clear_all().await?;

    info!("Database backend: {:?}", config.database.backend);

    let (language_service, module_service, sentence_service, item_service): (
        Arc<dyn api::state::LanguageServiceTrait>,
        Arc<dyn api::state::ModuleServiceTrait>,
        Arc<dyn api::state::SentenceServiceTrait>,
        Arc<dyn api::state::ItemServiceTrait>,
    ) = match config.database.backend {
        DatabaseBackend::Postgres => {
            info!("Connecting to PostgreSQL...");
            let pg_config = PostgresConfig::new(&config.database.url)
                .with_max_connections(config.database.max_connections)
                .with_min_connections(config.database.min_connections)
                .with_connect_timeout(config.database.connect_timeout_secs)
                .with_idle_timeout(config.database.idle_timeout_secs);
            let pool = connect_pool(&pg_config).await?;
            info!("PostgreSQL connection established");

            run_content_migrations(&pool).await?;

            let language_repository = Arc::new(PostgresLanguageRepository::new(pool.clone()));
            let module_repository = Arc::new(PostgresModuleRepository::new(pool.clone()));
            let sentence_repository = Arc::new(PostgresSentenceRepository::new(pool.clone()));
            let item_repository = Arc::new(PostgresItemRepository::new(pool));

            (
                Arc::new(LanguageService::new(
                    language_repository.clone(),
                    cache_region(&registry, LANGUAGES)?,
                )),
                Arc::new(ModuleService::new(
                    module_repository.clone(),
                    language_repository,
                    cache_region(&registry, MODULES)?,
                )),
                Arc::new(SentenceService::new(
                    sentence_repository,
                    module_repository,
                    cache_region(&registry, SENTENCES)?,
                )),
                Arc::new(ItemService::new(item_repository)),
            )
        }
        DatabaseBackend::Memory => {
            info!("Using in-memory repositories with demo content");
            let language_repository = Arc::new(InMemoryLanguageRepository::new());
            let module_repository = Arc::new(InMemoryModuleRepository::new());
            let sentence_repository = Arc::new(InMemorySentenceRepository::new());
            let item_repository = Arc::new(demo_item_repository());

            seed_demo_content(
                language_repository.as_ref(),
                module_repository.as_ref(),
                sentence_repository.as_ref(),
            )
            .await?;

            (
                Arc::new(LanguageService::new(
                    language_repository.clone(),
                    cache_region(&registry, LANGUAGES)?,
                )),
                Arc::new(ModuleService::new(
                    module_repository.clone(),
                    language_repository,
                    cache_region(&registry, MODULES)?,
                )),
                Arc::new(SentenceService::new(
                    sentence_repository,
                    module_repository,
                    cache_region(&registry, SENTENCES)?,
                )),
                Arc::new(ItemService::new(item_repository)),
            )
        }
    };

    let image_reader = Arc::new(CachedBlobReader::new(
        create_blob_store(config)?,
        cache_region(&registry, BLOBS)?,
        cache_region(&registry, BLOB_EXISTENCE)?,
    ));

    Ok(AppState::new(
        language_service,
        module_service,
        sentence_service,
        item_service,
        image_reader,
        registry,
    ))
}

fn create_blob_store(config: &AppConfig) -> anyhow::Result<Arc<dyn BlobStore>> {
    let mut blob_config = AzureBlobConfig::new(
        &config.blob_store.account,
        &config.blob_store.access_key,
        &config.blob_store.container,
    );

    if let Some(endpoint) = &config.blob_store.endpoint {
        blob_config = blob_config.with_endpoint(endpoint);
    }

    Ok(Arc::new(AzureBlobStore::new(blob_config)?))
}

fn cache_region(registry: &CacheRegistry, name: &str) -> anyhow::Result<Arc<dyn Cache>> {
    registry
        .region(name)
        .ok_or_else(|| anyhow::anyhow!("Cache region '{}' is not configured", name))
}

// ============================================================================
// Demo Content
// ============================================================================

async fn seed_demo_content(
    languages: &InMemoryLanguageRepository,
    modules: &InMemoryModuleRepository,
    sentences: &InMemorySentenceRepository,
) -> anyhow::Result<()> {
    use domain::{LanguageRepository, ModuleRepository, SentenceRepository};

    let tagalog = languages
        .create(NewLanguage {
            name: "Tagalog".to_string(),
            background_image_url: Some("Tagalog/background.jpg".to_string()),
            country_code: Some("PH".to_string()),
            language_presentation: Some(
                "Learn Tagalog, the language of the Philippines.".to_string(),
            ),
        })
        .await?;

    let greetings = modules
        .create(NewModule {
            language_id: tagalog.id,
            name: "Greetings".to_string(),
            description: Some("Say hello and introduce yourself".to_string()),
            module_presentation: Some("Start with these everyday phrases.".to_string()),
            material_icon_name: Some("waving_hand".to_string()),
        })
        .await?;

    let numbers = modules
        .create(NewModule {
            language_id: tagalog.id,
            name: "Numbers".to_string(),
            description: Some("Count from one to ten".to_string()),
            module_presentation: None,
            material_icon_name: Some("tag".to_string()),
        })
        .await?;

    let demo_sentences = [
        (greetings.id, 1, "Kamusta ka?", "How are you?", 0),
        (greetings.id, 2, "Mabuti naman ako", "I am fine", 1),
        (greetings.id, 3, "Salamat", "Thank you", 0),
        (numbers.id, 1, "Isa", "One", 0),
        (numbers.id, 2, "Dalawa", "Two", 0),
        (numbers.id, 3, "Tatlo", "Three", 0),
    ];

    for (module_id, position, learning, translation, speaker) in demo_sentences {
        sentences
            .create(NewSentence {
                module_id,
                position,
                learning_text: learning.to_string(),
                translation_text: translation.to_string(),
                speaker,
            })
            .await?;
    }

    Ok(())
}

fn demo_item_repository() -> InMemoryItemRepository {
    InMemoryItemRepository::new()
        .with_item(Item::new(1, "kamusta", "hello"))
        .with_item(Item::new(2, "salamat", "thank you"))
        .with_item(Item::new(3, "oo", "yes"))
        .with_item(Item::new(4, "hindi", "no"))
}
