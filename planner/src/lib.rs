//! # Cayo: Cayo Perico heist planner
//!
//! Plans the secondary loot of a Cayo Perico heist across up to four bags and
//! works out what each player should be paid.
//!
//! ## Pipeline
//!
//! | Step | Module | Description |
//! |------|--------|-------------|
//! | Catalog | [`constants`], [`catalog`] | Static primary/secondary loot tables: value, bag weight, pickup curve, solo rule |
//! | Allocate | [`allocator`], [`pickup`] | Greedy value-density packing, one bag per player, shared depleting stock |
//! | Pay out | [`payout`] | Primary (+hard mode) + bags + safe, minus fees, split by share, plus elite bonus |
//! | Split | [`shares`] | Default splits by crew size, validation of custom splits |
//! | Report | [`report`] | Loot left behind, predicted vs real gains |
//!
//! [`cooldown`] and [`lifecycle`] describe when the next heist opens and
//! which status changes are legal; [`server`] exposes everything as JSON.
//!
//! ## Money
//!
//! All amounts are whole GTA$. Every multiplication truncates toward zero, in
//! the order documented in [`payout`]; fee and hard-mode rates are basis
//! points so truncation is exact.
//!
//! ## Bag capacity
//!
//! A bag holds 100%. One full unit of a loot kind uses `weight x 100` percent
//! (a gold stack 66.65%, a painting 50%). Divisible kinds may be split to fill
//! the last gap; paintings may not.

pub mod allocator;
pub mod catalog;
pub mod constants;
pub mod cooldown;
pub mod env_config;
pub mod error;
pub mod lifecycle;
pub mod payout;
pub mod pickup;
pub mod report;
pub mod server;
pub mod shares;
pub mod types;
