// Nutrifyd Data
// This crate handles persistence for user profiles and tracking journals

// Repository implementations for data access
pub mod repository;

// Data storage models
pub mod models;
