pub mod cat_docs;
