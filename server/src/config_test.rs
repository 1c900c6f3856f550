use super::*;
use std::collections::HashMap;

fn options() -> LeptosOptions {
    LeptosOptions::builder()
        .output_name("elegance")
        .site_root("target/site")
        .site_addr(SocketAddr::from(([127, 0, 0, 1], 3000)))
        .build()
}

fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

// =============================================================================
// parse_or
// =============================================================================

#[test]
fn parse_or_missing_returns_default() {
    let val: u16 = parse_or(None, 42);
    assert_eq!(val, 42);
}

#[test]
fn parse_or_present_valid() {
    let val: u16 = parse_or(Some(" 8080 ".into()), 0);
    assert_eq!(val, 8080);
}

#[test]
fn parse_or_present_invalid_returns_default() {
    let val: u16 = parse_or(Some("notanumber".into()), 7);
    assert_eq!(val, 7);
}

// =============================================================================
// ServerConfig::resolve
// =============================================================================

#[test]
fn resolve_without_overrides_uses_leptos_defaults() {
    let config = ServerConfig::resolve(options(), vars(&[]));
    assert_eq!(config.addr, SocketAddr::from(([127, 0, 0, 1], 3000)));
    assert_eq!(config.public_dir, PathBuf::from("target/site"));
}

#[test]
fn resolve_applies_bind_addr_and_port() {
    let config = ServerConfig::resolve(options(), vars(&[(BIND_ADDR_VAR, "0.0.0.0"), (PORT_VAR, "8080")]));
    assert_eq!(config.addr, SocketAddr::from(([0, 0, 0, 0], 8080)));
}

#[test]
fn resolve_ignores_malformed_port() {
    let config = ServerConfig::resolve(options(), vars(&[(PORT_VAR, "eighty")]));
    assert_eq!(config.addr.port(), 3000);
}

#[test]
fn resolve_public_dir_override() {
    let config = ServerConfig::resolve(options(), vars(&[(PUBLIC_DIR_VAR, "/srv/elegance")]));
    assert_eq!(config.public_dir, PathBuf::from("/srv/elegance"));
}

#[test]
fn resolve_blank_public_dir_falls_back_to_site_root() {
    let config = ServerConfig::resolve(options(), vars(&[(PUBLIC_DIR_VAR, "  ")]));
    assert_eq!(config.public_dir, PathBuf::from("target/site"));
}
