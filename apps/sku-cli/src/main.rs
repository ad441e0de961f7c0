//! # generate-sku
//!
//! Prints the SKU of a digital book for a partner.
//!
//! ```text
//! $ generate-sku digital-book-test-1 cae1c9f5-f312-4ed7-8fce-729ba9b64244
//! 2AB40EF
//! ```
//!
//! Exit codes: 0 on success, 1 when an argument is not valid UTF-8, 2 for
//! usage errors (missing or extra arguments).

mod config;

use std::ffi::OsString;

use anyhow::Context;
use clap::Parser;
use tracing::debug;

use crate::config::{CliConfig, LogFormat};

/// Derive the 7-character SKU of a digital book.
#[derive(Debug, Parser)]
#[command(name = "generate-sku", version, about)]
struct Cli {
    /// Catalog key of the book (any text; case is ignored)
    book_key: OsString,

    /// Identifier of the selling partner (any text; case is ignored)
    partner_id: OsString,
}

/// Raised when an argument cannot be read as text.
#[derive(Debug, thiserror::Error)]
#[error("argument <{name}> is not valid UTF-8")]
struct NotUtf8 {
    name: &'static str,
}

fn into_text(value: OsString, name: &'static str) -> Result<String, NotUtf8> {
    value.into_string().map_err(|_| NotUtf8 { name })
}

fn init_tracing(config: &CliConfig) {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(config.env_filter())
        .with_writer(std::io::stderr)
        .with_target(true);

    match config.log_format {
        LogFormat::Compact => builder.compact().init(),
        LogFormat::Pretty => builder.pretty().init(),
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = CliConfig::load().context("Failed to load configuration")?;
    init_tracing(&config);

    let book_key = into_text(cli.book_key, "BOOK_KEY")?;
    let partner_id = into_text(cli.partner_id, "PARTNER_ID")?;

    let sku = storefront_core::generate_sku(&book_key, &partner_id);
    debug!(book_key = %book_key, partner_id = %partner_id, sku = %sku, "Generated SKU");

    println!("{sku}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parses_two_positionals() {
        let cli = Cli::try_parse_from(["generate-sku", "Book", "Partner"]).unwrap();
        assert_eq!(cli.book_key, "Book");
        assert_eq!(cli.partner_id, "Partner");

        assert!(Cli::try_parse_from(["generate-sku", "only-one"]).is_err());
        assert!(Cli::try_parse_from(["generate-sku", "a", "b", "c"]).is_err());
    }

    #[test]
    fn test_into_text_names_the_argument() {
        assert_eq!(into_text(OsString::from("ok"), "BOOK_KEY").unwrap(), "ok");

        #[cfg(unix)]
        {
            use std::os::unix::ffi::OsStringExt;
            let bad = OsString::from_vec(vec![0x66, 0x6f, 0x80]);
            let err = into_text(bad, "PARTNER_ID").unwrap_err();
            assert_eq!(err.to_string(), "argument <PARTNER_ID> is not valid UTF-8");
        }
    }
}
