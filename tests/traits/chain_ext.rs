use option_rail::{chain, ChainExt};

struct Server {
    host: String,
    port: Option<u16>,
}

#[test]
fn chain_method_builds_a_root_proxy() {
    let server = Server {
        host: "localhost".into(),
        port: Some(8080),
    };

    let root = server.chain();
    assert!(!root.is_present());

    let host = server.chain().attr(|s| &s.host);
    assert_eq!(host.get().map(String::as_str), Some("localhost"));
}

#[test]
fn chain_method_matches_free_function() {
    let server = Server {
        host: "localhost".into(),
        port: None,
    };

    let via_method = server.chain().try_attr(|s| s.port.as_ref());
    let via_function = chain(&server).try_attr(|s| s.port.as_ref());

    assert_eq!(via_method.is_present(), via_function.is_present());
    assert_eq!(via_method.get(), via_function.get());
}

#[test]
fn chain_method_works_on_unsized_receivers() {
    let greeting: &str = "hello";
    let root = greeting.chain();

    assert!(!root.is_present());
    assert_eq!(root.get(), Some("hello"));
}
