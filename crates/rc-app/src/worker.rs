use std::sync::mpsc::{Receiver, Sender, channel};
use std::thread::{self, JoinHandle};

use rc_core::{DesignStyle, RoomType};

use crate::client::DesignClient;
use crate::client::schemas::{Credentials, GenerationRecord, GenerationResult, ImageUpload};
use crate::error::AppError;

pub enum WorkerCommand {
    Generate {
        image: ImageUpload,
        style: DesignStyle,
        room_type: RoomType,
    },
    FetchHistory,
    FetchImage { url: String },
    SignIn(Credentials),
    Register(Credentials),
    Shutdown,
}

pub enum WorkerResponse {
    GenerationFinished(Result<GenerationResult, AppError>),
    HistoryLoaded(Result<Vec<GenerationRecord>, AppError>),
    ImageFetched {
        url: String,
        result: Result<Vec<u8>, AppError>,
    },
    SignInFinished(Result<(), AppError>),
    RegisterFinished(Result<(), AppError>),
}

/// Background thread owning the blocking HTTP client. Commands go in over
/// one channel, responses come back over another; the UI thread polls
/// [`try_recv`](Self::try_recv) each frame and never blocks on the network.
/// One thread serializes all traffic, so nothing runs concurrently with
/// the single in-flight generation.
pub struct ClientWorker {
    command_tx: Sender<WorkerCommand>,
    response_rx: Receiver<WorkerResponse>,
    thread_handle: Option<JoinHandle<()>>,
}

impl ClientWorker {
    pub fn new(client: DesignClient) -> Self {
        let (command_tx, command_rx) = channel::<WorkerCommand>();
        let (response_tx, response_rx) = channel::<WorkerResponse>();

        let thread_handle = thread::spawn(move || {
            loop {
                match command_rx.recv() {
                    Ok(WorkerCommand::Generate { image, style, room_type }) => {
                        let result = client.generate(&image, style, room_type);
                        let _ = response_tx.send(WorkerResponse::GenerationFinished(result));
                    }

                    Ok(WorkerCommand::FetchHistory) => {
                        let _ = response_tx.send(WorkerResponse::HistoryLoaded(client.history()));
                    }

                    Ok(WorkerCommand::FetchImage { url }) => {
                        let result = client.fetch_image(&url);
                        let _ = response_tx.send(WorkerResponse::ImageFetched { url, result });
                    }

                    Ok(WorkerCommand::SignIn(credentials)) => {
                        let result = client.sign_in(&credentials);
                        let _ = response_tx.send(WorkerResponse::SignInFinished(result));
                    }

                    Ok(WorkerCommand::Register(credentials)) => {
                        let result = client.register(&credentials);
                        let _ = response_tx.send(WorkerResponse::RegisterFinished(result));
                    }

                    Ok(WorkerCommand::Shutdown) => {
                        break;
                    }

                    Err(_) => {
                        break;
                    }
                }
            }
        });

        Self {
            command_tx,
            response_rx,
            thread_handle: Some(thread_handle),
        }
    }

    pub fn submit(&self, command: WorkerCommand) {
        if self.command_tx.send(command).is_err() {
            log::error!("client worker is gone; dropping command");
        }
    }

    pub fn try_recv(&self) -> Option<WorkerResponse> {
        self.response_rx.try_recv().ok()
    }

    pub fn shutdown(&mut self) {
        let _ = self.command_tx.send(WorkerCommand::Shutdown);
        if let Some(handle) = self.thread_handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for ClientWorker {
    fn drop(&mut self) {
        self.shutdown();
    }
}
