//! # Gatehouse
//!
//! Registration, login, and password-reset service.
//!
//! Gatehouse is a thin HTTP layer over three external collaborators:
//! a relational store for accounts and reset tickets, an SMTP transport
//! for transactional email, and signed bearer tokens for sessions.
//!
//! ## Modules
//!
//! - `app`: Application state and router builder
//! - `auth`: Password hashing, token issuance, reset-code generation
//! - `config`: Configuration management
//! - `error`: Error handling and HTTP response mapping
//! - `mail`: Mail transport seam and message templates
//! - `middleware`: Security headers layer
//! - `models`: Account and reset-ticket data types
//! - `routes`: API route handlers
//! - `store`: Persistence seam with Postgres and in-memory backends

pub mod app;
pub mod auth;
pub mod config;
pub mod error;
pub mod mail;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod store;
