#![allow(non_snake_case)]

pub mod app;
pub mod context;
pub mod registry;
pub mod routes;
pub mod shell;
pub mod views;
pub mod vm;

pub use app::App;
pub use context::{AppContext, UiApp, build_app_context};
pub use registry::{PageProps, PageRegistry, PageRenderer, Resolution};
pub use routes::Route;
