/// Typed access to the environment variables a crate needs. `load` reads
/// everything up front and panics on a missing required variable, so a
/// misconfigured process refuses to start instead of failing mid-request.
pub trait EnvVars {
    fn load() -> Self;
    fn get_env_var(&self, key: &str) -> String;
}
