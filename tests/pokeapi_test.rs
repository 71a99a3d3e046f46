mod common;

use std::sync::Arc;

use common::{mount_pokemon, pokeapi_for};
use pokedex::cache::{MemoryCache, VerificationCache};
use pokedex::pokeapi::VerifyError;
use reqwest::StatusCode;
use wiremock::MockServer;

#[tokio::test]
async fn test_verify_real_pokemon() {
    let server = MockServer::start().await;
    mount_pokemon(&server, "pikachu", 200, 1).await;

    let cache = Arc::new(MemoryCache::new());
    let pokeapi = pokeapi_for(&server, cache.clone());

    assert!(pokeapi.verify_name("pikachu").await.unwrap());
    assert_eq!(cache.get("pikachu").await.unwrap(), Some(true));
}

#[tokio::test]
async fn test_verify_unknown_pokemon() {
    let server = MockServer::start().await;
    mount_pokemon(&server, "not-a-real-pokemon-xyz", 404, 1).await;

    let cache = Arc::new(MemoryCache::new());
    let pokeapi = pokeapi_for(&server, cache.clone());

    assert!(!pokeapi.verify_name("not-a-real-pokemon-xyz").await.unwrap());
    assert_eq!(
        cache.get("not-a-real-pokemon-xyz").await.unwrap(),
        Some(false)
    );
}

#[tokio::test]
async fn test_second_lookup_is_served_from_cache() {
    let server = MockServer::start().await;
    // expect(1) 在 MockServer 销毁时校验
    mount_pokemon(&server, "eevee", 200, 1).await;
    mount_pokemon(&server, "agumon", 404, 1).await;

    let pokeapi = pokeapi_for(&server, Arc::new(MemoryCache::new()));

    assert!(pokeapi.verify_name("eevee").await.unwrap());
    assert!(pokeapi.verify_name("eevee").await.unwrap());

    assert!(!pokeapi.verify_name("agumon").await.unwrap());
    assert!(!pokeapi.verify_name("agumon").await.unwrap());
}

#[tokio::test]
async fn test_cache_is_case_insensitive() {
    let server = MockServer::start().await;
    mount_pokemon(&server, "Snorlax", 200, 1).await;

    let cache = Arc::new(MemoryCache::new());
    let pokeapi = pokeapi_for(&server, cache.clone());

    // 请求保留原始大小写，缓存键为小写
    assert!(pokeapi.verify_name("Snorlax").await.unwrap());
    assert!(pokeapi.verify_name("snorlax").await.unwrap());
    assert!(pokeapi.verify_name("SNORLAX").await.unwrap());
    assert_eq!(cache.len().await, 1);
}

#[tokio::test]
async fn test_cached_value_skips_network() {
    let server = MockServer::start().await;
    mount_pokemon(&server, "mew", 200, 0).await;

    let cache = Arc::new(MemoryCache::new());
    cache.set("mew", false).await.unwrap();
    let pokeapi = pokeapi_for(&server, cache.clone());

    assert!(!pokeapi.verify_name("Mew").await.unwrap());
}

#[tokio::test]
async fn test_server_error_is_not_cached() {
    let server = MockServer::start().await;
    mount_pokemon(&server, "ditto", 503, 2).await;

    let cache = Arc::new(MemoryCache::new());
    let pokeapi = pokeapi_for(&server, cache.clone());

    for _ in 0..2 {
        let err = pokeapi.verify_name("ditto").await.unwrap_err();
        assert!(matches!(
            err,
            VerifyError::Upstream(StatusCode::SERVICE_UNAVAILABLE)
        ));
    }
    assert!(cache.is_empty().await);
}

#[tokio::test]
async fn test_other_client_errors_are_upstream_errors() {
    let server = MockServer::start().await;
    mount_pokemon(&server, "psyduck", 429, 1).await;

    let cache = Arc::new(MemoryCache::new());
    let pokeapi = pokeapi_for(&server, cache.clone());

    let err = pokeapi.verify_name("psyduck").await.unwrap_err();
    assert!(matches!(
        err,
        VerifyError::Upstream(StatusCode::TOO_MANY_REQUESTS)
    ));
    assert_eq!(cache.get("psyduck").await.unwrap(), None);
}

#[tokio::test]
async fn test_any_success_status_counts_as_real() {
    let server = MockServer::start().await;
    mount_pokemon(&server, "togepi", 204, 1).await;

    let pokeapi = pokeapi_for(&server, Arc::new(MemoryCache::new()));
    assert!(pokeapi.verify_name("togepi").await.unwrap());
}

#[tokio::test]
async fn test_fetch_pokemon_returns_raw_response() {
    let server = MockServer::start().await;
    mount_pokemon(&server, "bulbasaur", 200, 1).await;

    let pokeapi = pokeapi_for(&server, Arc::new(MemoryCache::new()));
    let res = pokeapi.fetch_pokemon("bulbasaur").await.unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["name"], "bulbasaur");
}
