use crate::dto::HealthRes;

/// Health check shared by every binary that serves HTTP.
#[derive(Clone, Default)]
pub struct HealthService;

impl HealthService {
    /// Report the service as alive.
    ///
    /// Health does not touch the CMS: a CMS outage degrades catalog pages to empty lists
    /// but the site itself stays up.
    pub fn check_health() -> HealthRes {
        HealthRes {
            ok: true,
            message: "Scamwatch is alive".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_alive() {
        let res = HealthService::check_health();
        assert!(res.ok);
        assert!(res.message.contains("alive"));
    }
}
