/// Platform - Dependency injection container for all ports.
///
/// Hybrid approach:
/// - Stateless ports: `&'static` references (logger, clock)
/// - Stateful ports: `Arc<dyn Trait>` (storage, HTTP client)
use crate::config::PortalConfig;
use crate::errors::PortalError;
use crate::ports::{ClockPort, HttpPort, KeyValueStorePort, LoggerPort};
use std::sync::Arc;

#[derive(Clone)]
pub struct Platform {
    logger: &'static dyn LoggerPort,
    clock: &'static dyn ClockPort,
    storage: Arc<dyn KeyValueStorePort>,
    http: Arc<dyn HttpPort>,
}

impl Platform {
    /// Creates a Platform with the default adapters for the current target.
    pub fn new(config: &PortalConfig) -> Result<Self, PortalError> {
        Ok(Self {
            logger: crate::adapters::logger(),
            clock: crate::adapters::clock(),
            storage: crate::adapters::default_storage(config)?,
            http: crate::adapters::default_http(config)?,
        })
    }

    /// Creates a Platform from explicit ports, e.g. test doubles.
    pub fn with_ports(
        logger: &'static dyn LoggerPort,
        clock: &'static dyn ClockPort,
        storage: Arc<dyn KeyValueStorePort>,
        http: Arc<dyn HttpPort>,
    ) -> Self {
        Self {
            logger,
            clock,
            storage,
            http,
        }
    }

    #[inline]
    pub fn logger(&self) -> &'static dyn LoggerPort {
        self.logger
    }

    #[inline]
    pub fn clock(&self) -> &'static dyn ClockPort {
        self.clock
    }

    #[inline]
    pub fn storage(&self) -> Arc<dyn KeyValueStorePort> {
        Arc::clone(&self.storage)
    }

    #[inline]
    pub fn http(&self) -> Arc<dyn HttpPort> {
        Arc::clone(&self.http)
    }
}
