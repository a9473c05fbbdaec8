use letterbox_core_contact_impl::ContactServiceImpl;
use letterbox_core_health_impl::HealthServiceImpl;
use letterbox_email_impl::EmailServiceImpl;
use letterbox_ratelimit_memory::MemoryRateLimiter;
use letterbox_shared_impl::time::TimeServiceImpl;
use letterbox_templates_impl::TemplateServiceImpl;

// Email
pub type Email = EmailServiceImpl;

// Shared
pub type Time = TimeServiceImpl;

// Templates
pub type Template = TemplateServiceImpl;

// Rate limiting
pub type RateLimit = MemoryRateLimiter<Time>;

// Core
pub type ContactFeature<E = Email> = ContactServiceImpl<RateLimit, E, Template, Time>;
pub type HealthFeature = HealthServiceImpl<Time>;

// API
pub type RestServer<E = Email> = letterbox_api_rest::RestServer<HealthFeature, ContactFeature<E>>;
