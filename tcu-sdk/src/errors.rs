pub mod sdk_error;
