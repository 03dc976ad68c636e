//! # Async Directory Loader Worker
//!
//! The worker thread handles the asynchronous fetch of the user collection
//! so the UI thread never blocks on the network. The UI sends it tasks over
//! a channel and drains replies non-blockingly on each tick.
//!
//! Exactly one load is requested per activation; search and selection never
//! re-trigger it. If the UI is torn down before the request settles, the
//! reply send fails and the result is discarded instead of being applied to
//! dead state.

use std::sync::mpsc::{channel, Receiver, Sender};
use std::thread;

use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};
use tracing::{debug, error, info};

use rolodex_api::{DirectoryClient, User};

/// Requests the UI thread can make of the worker
#[derive(Debug)]
pub enum WorkerTask {
    /// Fetch the full user collection from the directory endpoint
    LoadUsers,
}

/// Replies the worker sends back to the UI thread
#[derive(Debug)]
pub enum WorkerReply {
    /// The load settled successfully, records in wire order
    UsersLoaded(Vec<User>),
    /// The load settled with an error, already logged
    LoadFailed,
}

/// UI-side handle for sending tasks to the worker
pub struct Requester {
    tx: UnboundedSender<WorkerTask>,
}

impl Requester {
    /// Request the one-time load of the user collection
    pub fn load_users(&self) {
        // The worker outlives every sender, so this only fails during
        // shutdown races; there is nothing useful to do about it then.
        let _ = self.tx.send(WorkerTask::LoadUsers);
    }
}

/// Worker state: the API client and the reply channel back to the UI
pub struct ClientWorker {
    client: DirectoryClient,
    reply: Sender<WorkerReply>,
}

impl ClientWorker {
    /// Spawn the worker thread.
    ///
    /// Returns the task handle and the reply receiver. The thread owns a
    /// current-thread tokio runtime and exits when every [`Requester`] has
    /// been dropped.
    pub fn spawn(client: DirectoryClient) -> (Requester, Receiver<WorkerReply>) {
        let (task_tx, task_rx) = unbounded_channel();
        let (reply_tx, reply_rx) = channel();

        thread::spawn(move || {
            let rt = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .expect("failed to build tokio runtime for worker thread");

            let worker = ClientWorker { client, reply: reply_tx };
            rt.block_on(worker.run(task_rx));
        });

        (Requester { tx: task_tx }, reply_rx)
    }

    async fn run(self, mut rx: UnboundedReceiver<WorkerTask>) {
        while let Some(task) = rx.recv().await {
            match task {
                WorkerTask::LoadUsers => self.load_users().await,
            }
        }

        debug!("all requesters dropped; worker exiting");
    }

    async fn load_users(&self) {
        info!(endpoint = %self.client.endpoint(), "fetching user directory");

        let reply = match self.client.fetch_users().await {
            Ok(users) => {
                info!(count = users.len(), "user directory loaded");
                WorkerReply::UsersLoaded(users)
            },
            Err(e) => {
                error!(err = %e, "failed to fetch user directory");
                WorkerReply::LoadFailed
            },
        };

        if self.reply.send(reply).is_err() {
            debug!("view torn down before the load settled; result discarded");
        }
    }
}
