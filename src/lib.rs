// Library root
// -----------
// This crate exposes the uploader as a small library; the binary
// (`main.rs`) parses the command line and calls into it.
//
// Module responsibilities:
// - `cli`: the declarative command-line grammar.
// - `config`: base URL validation and normalization, source selection.
// - `source`: reading the file or standard input to be uploaded.
// - `api`: the multipart POST to the drop server and token handling.
// - `error`: the fatal error kinds and their exit statuses.
pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod source;
