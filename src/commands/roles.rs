use crate::libs::{config::Config, messages::Message, view::View};
use crate::msg_print;
use anyhow::Result;

pub fn cmd() -> Result<()> {
    let config = Config::read()?;

    msg_print!(Message::RolesHeader);
    View::new(config.currency().symbol).roles(&config.rate_table())
}
