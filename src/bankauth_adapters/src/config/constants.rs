pub mod env {
    pub const ENV_PREFIX: &str = "BANKAUTH";
    pub const ENV_SEPARATOR: &str = "__";
    pub const CONFIG_FILE_NAME: &str = "bankauth";
}

pub mod defaults {
    pub const PASSWORD_MIN_LENGTH: usize = 8;
    pub const SESSION_TTL_SECS: u64 = 30 * 60;
    pub const SESSION_SWEEP_INTERVAL_SECS: u64 = 60;
    pub const HASHING_MEMORY_KIB: u32 = 15_000;
    pub const HASHING_ITERATIONS: u32 = 2;
    pub const HASHING_PARALLELISM: u32 = 1;
}

pub mod limits {
    /// Longest session lifetime a configuration may ask for: 30 days.
    pub const MAX_SESSION_TTL_SECS: u64 = 30 * 24 * 60 * 60;
}

pub mod hashing {
    pub const SALT_LEN: usize = 16;
    pub const HASH_LEN: usize = 32;
}

pub mod test {
    /// Cheap Argon2 parameters so test suites do not spend seconds per hash.
    pub mod hashing {
        pub const MEMORY_KIB: u32 = 64;
        pub const ITERATIONS: u32 = 1;
        pub const PARALLELISM: u32 = 1;
    }
}
