//! # survml
//!
//! A compiler for plain-text survey outlines into survey markup.
//!
//! Survey authors type option lists and question headers as loose text; the
//! two pipelines here rewrite a selection in place as strict markup:
//!
//! - the cells pipeline labels each line and wraps it in a cell fragment
//!   (`<row>`, `<col>`, `<choice>`, ...);
//! - the question pipeline splits a block into label, title, and cell body
//!   and wraps it in a typed question element with inferred attributes.
//!
//! The host editor is abstracted behind [`survml::host::SelectionHost`]; the
//! core takes plain strings in and returns plain strings out.

pub mod survml;
