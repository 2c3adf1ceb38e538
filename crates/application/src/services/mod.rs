//! Application services - Use case implementations

mod columns;
mod departure_board;
mod departure_service;

pub use columns::{display_len, pad_left, pad_right, truncate};
pub use departure_board::{
    BoardRow, ColorMode, ColumnWidths, DepartureBoard, lookahead, lookbehind, select_departures,
};
pub use departure_service::{DEFAULT_STOP_ID, DepartureService, STATION_PROMPT, StationChoice};
