//! Command-line configuration.

use clap::Parser;
use page_flip::BookConfig;

use crate::app::AppConfig;

/// Interactive page-flip book.  Drag a page across the spine to turn it.
#[derive(Debug, Parser)]
#[command(name = "flip_window", version, about)]
pub struct Cli {
    /// Number of pages in the book
    #[arg(short = 'n', long, default_value_t = 6)]
    pub pages: usize,

    /// Overall book width in pixels
    #[arg(long, default_value_t = 830.0)]
    pub book_width: f32,

    /// Overall book height in pixels
    #[arg(long, default_value_t = 260.0)]
    pub book_height: f32,

    /// Width of one page in pixels
    #[arg(long, default_value_t = 400.0)]
    pub page_width: f32,

    /// Height of one page in pixels
    #[arg(long, default_value_t = 250.0)]
    pub page_height: f32,

    /// Surface padding around the book for shadows and curl
    #[arg(long, default_value_t = 60.0)]
    pub padding: f32,

    /// Fraction of the remaining distance covered per tick (0–1, exclusive)
    #[arg(long, default_value_t = 0.2)]
    pub easing: f32,

    /// Animation ticks per second
    #[arg(long, default_value_t = 60)]
    pub tick_rate: u32,

    /// |progress| at which a page counts as settled
    #[arg(long, default_value_t = 0.997)]
    pub threshold: f32,
}

impl Cli {
    /// Collect the flags into an application config.  Validation happens
    /// when the book is built.
    pub fn into_config(self) -> AppConfig {
        AppConfig {
            book: BookConfig {
                book_width:  self.book_width,
                book_height: self.book_height,
                page_width:  self.page_width,
                page_height: self.page_height,
                padding:     self.padding,
                easing:      self.easing,
                tick_rate:   self.tick_rate,
                transition_threshold: self.threshold,
            },
            pages: self.pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_book_defaults() {
        let cli = Cli::try_parse_from(["flip_window"]).unwrap();
        assert_eq!(cli.into_config(), AppConfig::default());
    }

    #[test]
    fn flags_override() {
        let cli = Cli::try_parse_from(["flip_window", "-n", "12", "--easing", "0.35"]).unwrap();
        let cfg = cli.into_config();
        assert_eq!(cfg.pages, 12);
        assert_eq!(cfg.book.easing, 0.35);
        assert_eq!(cfg.book.page_width, 400.0);
    }

    #[test]
    fn clap_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
