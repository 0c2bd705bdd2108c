pub mod support;

mod account_flow;
