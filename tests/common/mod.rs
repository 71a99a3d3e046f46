#![allow(dead_code)]

use std::sync::Arc;

use pokedex::AppState;
use pokedex::cache::MemoryCache;
use pokedex::database::MemoryPokemonStore;
use pokedex::pokeapi::PokeApi;
use reqwest::{Client, Url};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const POKEMON_PATH: &str = "/api/v2/pokemon";

pub fn pokeapi_for(server: &MockServer, cache: Arc<MemoryCache>) -> PokeApi {
    let base = Url::parse(&format!("{}{}", server.uri(), POKEMON_PATH)).unwrap();
    PokeApi::new(Client::new(), base, cache)
}

/// 为 `name` 挂载返回 `status` 的 PokeAPI 桩，预期被调用 `times` 次
pub async fn mount_pokemon(server: &MockServer, name: &str, status: u16, times: u64) {
    let template = if status == 200 {
        ResponseTemplate::new(200).set_body_json(serde_json::json!({ "name": name }))
    } else {
        ResponseTemplate::new(status)
    };
    Mock::given(method("GET"))
        .and(path(format!("{}/{}", POKEMON_PATH, name)))
        .respond_with(template)
        .expect(times)
        .mount(server)
        .await;
}

pub struct TestApp {
    pub state: AppState,
    pub store: Arc<MemoryPokemonStore>,
    pub cache: Arc<MemoryCache>,
}

pub fn test_app(server: &MockServer) -> TestApp {
    let store = Arc::new(MemoryPokemonStore::new());
    let cache = Arc::new(MemoryCache::new());
    let pokeapi = Arc::new(pokeapi_for(server, cache.clone()));
    let state = AppState {
        store: store.clone(),
        pokeapi,
    };
    TestApp {
        state,
        store,
        cache,
    }
}
