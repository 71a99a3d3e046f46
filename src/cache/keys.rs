/// 验证结果缓存键前缀
const VERIFIED_PREFIX: &str = "pokeapi:verified:";

/// 名称归一化后的缓存键，大小写不敏感
pub fn verification_key(name: &str) -> String {
    name.to_lowercase()
}

/// Redis 中带命名空间的键
pub fn namespaced(key: &str) -> String {
    format!("{}{}", VERIFIED_PREFIX, key)
}
