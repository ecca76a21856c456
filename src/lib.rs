//! アニメ主題歌カタログ検索ツール

pub mod browser;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod lookup;
pub mod selector;
