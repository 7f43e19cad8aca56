/// Display a banner with version and useful information
pub fn print_banner() {
    let version = env!("CARGO_PKG_VERSION");
    let name = env!("CARGO_PKG_NAME");

    let banner = format!(
        r#"
██████  ██       █████  ███    ██ ██   ██ ██    ██ ██████
██   ██ ██      ██   ██ ████   ██ ██   ██ ██    ██ ██   ██
██████  ██      ███████ ██ ██  ██ ███████ ██    ██ ██████
██      ██      ██   ██ ██  ██ ██ ██   ██ ██    ██ ██   ██
██      ███████ ██   ██ ██   ████ ██   ██  ██████  ██████

╭────────────────────────────────────────────────────────╮
│  {}                                               │
│  Version: {}                                        │
│  Edition: {}                                         │
╰────────────────────────────────────────────────────────╯

"#,
        capitalize(name),
        version,
        "2021"
    );

    println!("{}", banner);
}

/// Display startup information
pub fn print_startup_info(host: &str, port: u16) {
    let info = format!(
        r#"
📋 Configuration Loaded
  🌐 Server Address: http://{}:{}
  📦 Ready to accept connections

"#,
        host, port
    );

    println!("{}", info);
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("planhub"), "Planhub");
        assert_eq!(capitalize("hello"), "Hello");
        assert_eq!(capitalize(""), "");
    }
}
