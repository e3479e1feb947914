/// Seam between configuration sources (CLI flags, build-config files) and
/// the resolver. Both sides stay decoupled from each other's shape.
pub trait SplitConfigProvider: Send + Sync {
    fn split_style(&self) -> &str;
    fn split_packages(&self) -> &[String];
}
