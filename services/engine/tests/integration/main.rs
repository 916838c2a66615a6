mod gate_test;
mod helpers;
