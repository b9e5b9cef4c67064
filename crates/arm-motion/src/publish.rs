use std::sync::mpsc::{self, Receiver, Sender};

use tracing::warn;

/// One-way message sink. Topic wiring and transport belong to the host.
pub trait Publisher<M> {
    fn publish(&self, message: M);
}

/// Publisher backed by an in-process channel.
pub struct ChannelPublisher<M> {
    sender: Sender<M>,
}

impl<M> ChannelPublisher<M> {
    pub fn new() -> (Self, Receiver<M>) {
        let (sender, receiver) = mpsc::channel();
        (Self { sender }, receiver)
    }
}

impl<M> Publisher<M> for ChannelPublisher<M> {
    fn publish(&self, message: M) {
        if self.sender.send(message).is_err() {
            warn!("dropping message, subscriber is gone");
        }
    }
}
