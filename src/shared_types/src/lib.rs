//! TypeScript bindings for `lorawan-console-core` are generated by `build.rs`
//! into `./generated/typescript`.
