mod constructs;
mod properties;
