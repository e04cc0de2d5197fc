/// Route component constants shared across crates
pub const PROXY_ROUTE_COMPONENT: &str = "proxy";
pub const PROXY_ROUTE_PREFIX: &str = const_str::concat!("/", PROXY_ROUTE_COMPONENT);

pub const HEALTH_ROUTE_COMPONENT: &str = "health";
pub const HEALTH_ROUTE_PREFIX: &str = const_str::concat!("/", HEALTH_ROUTE_COMPONENT);

/// Name reported by the health endpoint and used in the upstream user agent.
pub const SERVICE_NAME: &str = "kunai";

/// Product identifier written into calendars that arrive without one.
pub const DEFAULT_PRODID: &str = "-//Kunai//iCalendar Proxy//EN";

/// Domain suffix appended to generated UIDs.
pub const DEFAULT_UID_DOMAIN: &str = "kunai.local";
