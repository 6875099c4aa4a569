//! Deeply nested optional settings resolved with one chain per lookup,
//! the place null-safe chaining pays off most.

use option_rail::prelude::*;

struct TlsSettings {
    cert_path: Option<String>,
}

struct ServerSettings {
    port: u16,
    tls: Option<TlsSettings>,
}

struct AppConfig {
    server: Option<ServerSettings>,
}

fn describe(name: &str, config: &AppConfig) {
    let port = chain!(config => server?.port);
    let cert = chain!(config => server?.tls?.cert_path?);

    println!("[{name}]");
    println!("  port: {}", port.get_or(&8080));
    println!("  tls:  {}", if cert.is_present() { "on" } else { "off" });
    println!("  cert: {}", cert.get_or(&"<none>".to_string()));
}

fn main() {
    let full = AppConfig {
        server: Some(ServerSettings {
            port: 443,
            tls: Some(TlsSettings {
                cert_path: Some("/etc/ssl/server.pem".to_string()),
            }),
        }),
    };

    let plain = AppConfig {
        server: Some(ServerSettings {
            port: 3000,
            tls: None,
        }),
    };

    let empty = AppConfig { server: None };

    describe("full", &full);
    describe("plain", &plain);
    describe("empty", &empty);
}
