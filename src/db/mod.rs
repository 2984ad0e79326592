pub mod account_queries;
