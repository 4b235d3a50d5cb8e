use log::info;

/// A unit of work stepped repeatedly on its own thread. Returning `false`
/// ends the task.
pub trait SteppableTask: Send + 'static {
    fn step(&mut self) -> bool;
}

pub struct ThreadManager {
    tasks: Vec<ManagedTask>,
}

struct ManagedTask {
    name: String,
    handle: std::thread::JoinHandle<()>,
    stop_sender: crossbeam_channel::Sender<()>,
}

impl ThreadManager {
    #[must_use]
    pub fn new() -> Self {
        ThreadManager { tasks: Vec::new() }
    }

    /// Runs `task` on a named worker thread, stepping it once per
    /// `period`. Steps of the same task never overlap: the next step is
    /// scheduled only after the previous one returns.
    ///
    /// # Panics
    ///
    /// Panics if the worker thread cannot be spawned.
    pub fn add_task<T>(&mut self, task: T, period: std::time::Duration)
    where
        T: SteppableTask,
    {
        let (stop_sender, stop_receiver) = crossbeam_channel::bounded::<()>(1);
        let name = std::any::type_name::<T>().to_string();

        let handle = std::thread::Builder::new()
            .name(name.clone())
            .spawn(move || run_with_period(task, period, &stop_receiver))
            .expect("Failed to spawn worker thread");

        self.tasks.push(ManagedTask {
            name,
            handle,
            stop_sender,
        });
    }

    pub fn stop_all(&self) {
        info!("ThreadManager: Signaling all tasks to stop...");
        for task in &self.tasks {
            let _ = task.stop_sender.send(());
        }
    }

    pub fn join_all(&mut self) {
        for task in self.tasks.drain(..) {
            if task.handle.join().is_err() {
                log::error!("ThreadManager: Task '{0}' panicked.", task.name);
            }
        }
    }

    #[must_use]
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }
}

impl Default for ThreadManager {
    fn default() -> Self {
        ThreadManager::new()
    }
}

fn run_with_period<T: SteppableTask>(
    mut task: T,
    period: std::time::Duration,
    stop_receiver: &crossbeam_channel::Receiver<()>,
) {
    let mut next_run = std::time::Instant::now();
    loop {
        if !task.step() {
            break;
        }

        next_run += period;
        let now = std::time::Instant::now();

        if next_run > now {
            // Wait for the next slot OR a stop signal, whichever first.
            match stop_receiver.recv_timeout(next_run - now) {
                Ok(()) | Err(crossbeam_channel::RecvTimeoutError::Disconnected) => break,
                Err(crossbeam_channel::RecvTimeoutError::Timeout) => {}
            }
        } else {
            // Lagging; rebase the schedule instead of firing back-to-back.
            next_run = now;
            match stop_receiver.try_recv() {
                Ok(()) | Err(crossbeam_channel::TryRecvError::Disconnected) => break,
                Err(crossbeam_channel::TryRecvError::Empty) => {}
            }
        }
    }
}
