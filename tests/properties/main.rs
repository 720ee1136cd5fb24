mod cat_validation;
mod logging;
