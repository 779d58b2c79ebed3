mod fixture;
mod runtime_test;
