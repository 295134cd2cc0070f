pub mod http;
pub mod news;
pub mod movie;
pub mod weather;
pub mod timezone;

pub use http::{HttpTransport, ReqwestTransport};
pub use news::NewsService;
pub use movie::MovieService;
pub use weather::WeatherService;
pub use timezone::TimeZoneService;
