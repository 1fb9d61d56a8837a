use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "rent_finder")]
#[command(about = "Search a CSV of rental listings through a web form")]
pub struct Config {
    /// CSV file with at least size, area, price and location columns
    #[arg(long, env = "RENT_FINDER_DATA", default_value = "data/house_rent_mumbai.csv")]
    pub data: PathBuf,

    /// Address the HTTP server binds to
    #[arg(long, env = "RENT_FINDER_ADDR", default_value = "127.0.0.1:3000")]
    pub addr: SocketAddr,

    /// Number of server worker threads
    #[arg(long, env = "RENT_FINDER_WORKERS", default_value_t = 8)]
    pub workers: usize,
}
