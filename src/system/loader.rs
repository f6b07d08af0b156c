// Background loader - 목록/미리보기 I/O 워커
//
// 요청마다 워커 스레드를 띄우고 결과를 채널로 돌려준다.
// 레인(목록/미리보기)마다 세대 번호를 두어 최신 요청만 살아남는다:
// 새 요청은 이전 작업을 협조적으로 취소시키고, 늦게 도착한 이전 결과는 버려진다.

use crate::models::file_entry::FileEntry;
use crate::models::viewer::ViewerContent;
use crate::system::filesystem::{load_listing_unless, FileAccess};
use crate::system::preview::{load_preview_unless, PreviewKind};
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::thread;
use std::time::Duration;
use tracing::debug;

/// 작업 레인. 레인끼리는 서로를 취소하지 않는다
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lane {
    Listing,
    Preview,
}

/// 워커 작업
#[derive(Debug, Clone)]
pub enum LoadJob {
    Listing { dir: PathBuf },
    Preview { entry: FileEntry, kind: PreviewKind },
}

impl LoadJob {
    pub fn lane(&self) -> Lane {
        match self {
            LoadJob::Listing { .. } => Lane::Listing,
            LoadJob::Preview { .. } => Lane::Preview,
        }
    }
}

/// 워커 결과
#[derive(Debug, Clone)]
pub enum LoadOutcome {
    Listing {
        dir: PathBuf,
        entries: Vec<FileEntry>,
    },
    Preview {
        file_name: String,
        content: ViewerContent,
    },
}

#[derive(Debug, Clone)]
pub struct LoadResult {
    pub lane: Lane,
    /// 요청 시 발급된 세대 번호
    pub ticket: u64,
    pub outcome: LoadOutcome,
}

/// 백그라운드 로더
pub struct Loader {
    fs: Arc<dyn FileAccess>,
    result_tx: Sender<LoadResult>,
    result_rx: Receiver<LoadResult>,
    listing_generation: Arc<AtomicU64>,
    preview_generation: Arc<AtomicU64>,
}

impl Loader {
    pub fn new(fs: Arc<dyn FileAccess>) -> Self {
        let (result_tx, result_rx) = mpsc::channel();
        Self {
            fs,
            result_tx,
            result_rx,
            listing_generation: Arc::new(AtomicU64::new(0)),
            preview_generation: Arc::new(AtomicU64::new(0)),
        }
    }

    fn generation(&self, lane: Lane) -> &Arc<AtomicU64> {
        match lane {
            Lane::Listing => &self.listing_generation,
            Lane::Preview => &self.preview_generation,
        }
    }

    /// 작업 제출. 같은 레인의 이전 작업은 무효화되고 새 티켓을 반환
    pub fn submit(&self, job: LoadJob) -> u64 {
        let lane = job.lane();
        let generation = Arc::clone(self.generation(lane));
        let ticket = generation.fetch_add(1, Ordering::SeqCst) + 1;
        let fs = Arc::clone(&self.fs);
        let result_tx = self.result_tx.clone();

        thread::spawn(move || {
            let is_stale = || generation.load(Ordering::SeqCst) != ticket;

            let outcome = match job {
                LoadJob::Listing { dir } => load_listing_unless(fs.as_ref(), &dir, &is_stale)
                    .map(|entries| LoadOutcome::Listing { dir, entries }),
                LoadJob::Preview { entry, kind } => {
                    load_preview_unless(fs.as_ref(), &entry, kind, &is_stale).map(|content| {
                        LoadOutcome::Preview {
                            file_name: entry.name,
                            content,
                        }
                    })
                }
            };

            match outcome {
                Some(outcome) if !is_stale() => {
                    // 수신 측이 사라졌으면 결과는 버린다
                    let _ = result_tx.send(LoadResult {
                        lane,
                        ticket,
                        outcome,
                    });
                }
                _ => debug!("Dropping superseded {:?} load #{}", lane, ticket),
            }
        });

        ticket
    }

    /// 레인의 진행 중 작업 취소 (결과가 와도 무효)
    pub fn cancel(&self, lane: Lane) {
        self.generation(lane).fetch_add(1, Ordering::SeqCst);
    }

    /// 결과가 해당 레인의 최신 요청 것인지
    pub fn is_current(&self, result: &LoadResult) -> bool {
        self.generation(result.lane).load(Ordering::SeqCst) == result.ticket
    }

    /// 도착한 결과 하나 (비블로킹)
    pub fn try_recv(&self) -> Option<LoadResult> {
        self.result_rx.try_recv().ok()
    }

    /// 결과를 최대 `timeout` 동안 기다림
    #[cfg(test)]
    pub fn recv_timeout(&self, timeout: Duration) -> Option<LoadResult> {
        self.result_rx.recv_timeout(timeout).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::filesystem::fake::MemoryFileSystem;

    const WAIT: Duration = Duration::from_secs(5);

    fn loader() -> Loader {
        let fs = MemoryFileSystem::new();
        fs.add_dir("/a")
            .add_file("/a/one.txt", b"1")
            .add_dir("/b")
            .add_file("/b/two.txt", b"2");
        Loader::new(Arc::new(fs))
    }

    #[test]
    fn test_listing_result_arrives_with_ticket() {
        let loader = loader();
        let ticket = loader.submit(LoadJob::Listing {
            dir: PathBuf::from("/a"),
        });

        let result = loader.recv_timeout(WAIT).expect("listing result");
        assert_eq!(result.ticket, ticket);
        assert!(loader.is_current(&result));
        match result.outcome {
            LoadOutcome::Listing { dir, entries } => {
                assert_eq!(dir, PathBuf::from("/a"));
                assert_eq!(entries.len(), 1);
                assert_eq!(entries[0].name, "one.txt");
            }
            other => panic!("unexpected outcome {:?}", other),
        }
    }

    #[test]
    fn test_newer_request_supersedes_older_one() {
        let loader = loader();
        let first = loader.submit(LoadJob::Listing {
            dir: PathBuf::from("/a"),
        });
        let second = loader.submit(LoadJob::Listing {
            dir: PathBuf::from("/b"),
        });
        assert!(second > first);

        // 첫 요청 결과가 도착하더라도 최신이 아니다
        let mut current = Vec::new();
        while let Some(result) = loader.recv_timeout(Duration::from_millis(500)) {
            if loader.is_current(&result) {
                current.push(result);
            }
        }

        assert_eq!(current.len(), 1);
        assert_eq!(current[0].ticket, second);
        assert!(matches!(
            &current[0].outcome,
            LoadOutcome::Listing { dir, .. } if dir == &PathBuf::from("/b")
        ));
    }

    #[test]
    fn test_lanes_do_not_cancel_each_other() {
        let loader = loader();
        let listing = loader.submit(LoadJob::Listing {
            dir: PathBuf::from("/a"),
        });
        let entry = FileEntry::new(
            "one.txt".into(),
            PathBuf::from("/a/one.txt"),
            false,
            1,
            std::time::SystemTime::UNIX_EPOCH,
        );
        let preview = loader.submit(LoadJob::Preview {
            entry,
            kind: PreviewKind::Text,
        });

        let mut seen = Vec::new();
        for _ in 0..2 {
            let result = loader.recv_timeout(WAIT).expect("result");
            assert!(loader.is_current(&result));
            seen.push((result.lane, result.ticket));
        }
        assert!(seen.contains(&(Lane::Listing, listing)));
        assert!(seen.contains(&(Lane::Preview, preview)));
    }

    #[test]
    fn test_cancel_invalidates_in_flight_result() {
        let loader = loader();
        let ticket = loader.submit(LoadJob::Listing {
            dir: PathBuf::from("/a"),
        });
        loader.cancel(Lane::Listing);

        if let Some(result) = loader.recv_timeout(Duration::from_millis(500)) {
            assert_eq!(result.ticket, ticket);
            assert!(!loader.is_current(&result));
        }
    }
}
