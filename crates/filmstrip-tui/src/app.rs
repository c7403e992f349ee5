use crate::events::{Event, EventHandler};
use crate::search::SearchState;
use crate::ui;
use crossterm::{
    event::{KeyCode, KeyEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use filmstrip_core::{Carousel, CarouselConfig, FilmstripResult};
use filmstrip_domain::{ImageCard, LikeList};
use filmstrip_persistence::{scan_images, ChangeDetector, DirWatcher, LikesStore};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::mpsc;

#[derive(Debug, Clone, PartialEq)]
pub enum AppMode {
    Browse,
    Search,
}

pub struct App {
    pub should_quit: bool,
    pub mode: AppMode,
    pub cards: Vec<ImageCard>,
    pub likes: LikeList,
    pub search: SearchState,
    pub carousel: Carousel,
    images_dir: PathBuf,
    store: Arc<dyn LikesStore>,
    save_tx: mpsc::UnboundedSender<LikeList>,
    started: Instant,
}

impl App {
    pub fn new(
        images_dir: PathBuf,
        store: Arc<dyn LikesStore>,
        cards_per_view: usize,
    ) -> (Self, mpsc::UnboundedReceiver<LikeList>) {
        let (save_tx, save_rx) = mpsc::unbounded_channel();
        let config = CarouselConfig {
            cards_per_view,
            ..Default::default()
        };

        let app = Self {
            should_quit: false,
            mode: AppMode::Browse,
            cards: Vec::new(),
            likes: LikeList::new(),
            search: SearchState::new(),
            carousel: Carousel::new(config),
            images_dir,
            store,
            save_tx,
            started: Instant::now(),
        };
        (app, save_rx)
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.started.elapsed().as_millis() as u64
    }

    /// First load: likes, then the card list, and only then the carousel, so
    /// clones are never generated from a half-populated strip.
    pub async fn load_content(&mut self) -> FilmstripResult<()> {
        self.likes = self.store.load().await?;
        self.cards = scan_images(&self.images_dir).await?;
        self.carousel.initialize(self.cards.len());
        Ok(())
    }

    /// Rescan after the image directory changed.
    pub async fn reload_content(&mut self) -> FilmstripResult<()> {
        self.cards = scan_images(&self.images_dir).await?;
        self.carousel.initialize(self.cards.len());
        tracing::info!("Reloaded {} cards", self.cards.len());
        Ok(())
    }

    /// Toggle the like on the real card at the visible origin and queue a
    /// save. Clones never reach this: the carousel resolves the origin to a
    /// real index first.
    pub fn toggle_like_at_origin(&mut self) {
        let Some(index) = self.carousel.leading_real_index() else {
            return;
        };
        let Some(card) = self.cards.get(index) else {
            return;
        };
        let liked = self.likes.toggle(&card.url);
        tracing::debug!(url = %card.url, liked, "toggled like");
        let _ = self.save_tx.send(self.likes.clone());
    }

    pub fn handle_resize(&mut self, width: u16) {
        let cards_per_view = self.carousel.config().cards_per_view;
        self.carousel
            .on_resize(ui::strip_geometry(width, cards_per_view));
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind == KeyEventKind::Release {
            return;
        }
        match self.mode {
            AppMode::Browse => self.handle_browse_key(key),
            AppMode::Search => self.handle_search_key(key),
        }
    }

    fn handle_browse_key(&mut self, key: KeyEvent) {
        let now = self.elapsed_ms();
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => self.quit(),
            KeyCode::Left => self.carousel.advance(-1, now),
            KeyCode::Right => self.carousel.advance(1, now),
            KeyCode::Char('h') => {
                let slot = self.carousel.slot_size();
                self.carousel.scroll_by(-slot, now);
            }
            KeyCode::Char('l') => {
                let slot = self.carousel.slot_size();
                self.carousel.scroll_by(slot, now);
            }
            KeyCode::Char(c @ '1'..='9') => {
                let page = (c as usize) - ('1' as usize);
                if page < self.carousel.page_count() {
                    self.carousel.jump_to_page(page, now);
                }
            }
            KeyCode::Char(' ') | KeyCode::Enter => self.toggle_like_at_origin(),
            KeyCode::Char('/') => {
                self.mode = AppMode::Search;
                self.search.activate();
            }
            _ => {}
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.search.deactivate();
                self.mode = AppMode::Browse;
            }
            KeyCode::Backspace => self.search.input.backspace(),
            KeyCode::Left => self.search.input.move_left(),
            KeyCode::Right => self.search.input.move_right(),
            KeyCode::Char(c) => self.search.input.insert_char(c),
            _ => {}
        }
    }

    pub async fn run(
        mut self,
        mut save_rx: mpsc::UnboundedReceiver<LikeList>,
    ) -> FilmstripResult<()> {
        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(io::stdout());
        let mut terminal = Terminal::new(backend)?;

        // Background saver: the UI queues full likes snapshots, the task
        // writes them out in order.
        let store = self.store.clone();
        tokio::spawn(async move {
            while let Some(likes) = save_rx.recv().await {
                if let Err(e) = store.save(&likes).await {
                    tracing::warn!("Failed to save likes: {}", e);
                }
            }
        });

        let size = terminal.size()?;
        let cards_per_view = self.carousel.config().cards_per_view;
        self.carousel
            .set_geometry(ui::strip_geometry(size.width, cards_per_view));
        self.load_content().await?;

        let mut events = EventHandler::new();

        let watcher = DirWatcher::new();
        let mut change_rx = watcher.subscribe();
        watcher.start_watching(self.images_dir.clone()).await?;
        let notify_tx = events.sender();
        tokio::spawn(async move {
            while change_rx.recv().await.is_ok() {
                if notify_tx.send(Event::ContentChanged).is_err() {
                    break;
                }
            }
        });

        while !self.should_quit {
            match events.next().await {
                Some(Event::Tick) => {
                    let now = self.elapsed_ms();
                    self.carousel.tick(now);
                    terminal.draw(|frame| ui::render(&mut self, frame))?;
                }
                Some(Event::Key(key)) => self.handle_key(key),
                Some(Event::Resize(width, _)) => self.handle_resize(width),
                Some(Event::ContentChanged) => {
                    if let Err(e) = self.reload_content().await {
                        tracing::warn!("Reload after directory change failed: {}", e);
                    }
                }
                None => break,
            }
        }

        events.stop();
        watcher.stop_watching().await?;

        disable_raw_mode()?;
        execute!(io::stdout(), LeaveAlternateScreen)?;
        Ok(())
    }
}
