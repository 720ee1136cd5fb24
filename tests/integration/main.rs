mod cat_api;
mod logging;
mod metrics;
