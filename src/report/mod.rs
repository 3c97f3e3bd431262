//! Terminal and CSV output of predictions

mod format;
mod export;

pub use format::{
    format_currency, format_premium, render_text, round_to_cents, CURRENCY_SYMBOL,
    RESERVED_FIELDS_NOTE,
};
pub use export::{write_quotes_csv, write_series_csv};
