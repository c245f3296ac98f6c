use daysort_domain::OverwritePolicy;
use daysort_shared_kernel::DomainResult;

/// clap value parser for `--overwrite`; keeps the domain's error wording.
pub fn parse_overwrite_policy(s: &str) -> DomainResult<OverwritePolicy> {
    s.parse()
}
