//! Quran browser: a searchable surah list and a verse reader with paging,
//! an optional translation track and recitation links.

use crate::api::quran::{
    self, Chapter, Pagination, Verse, VersesResponse, DEFAULT_TRANSLATION, RECITERS,
};
use crate::api::ApiError;
use crate::input::TextInput;
use crate::runtime::{Effect, FetchRequest};
use crate::terminal::{KeyCode, KeyEvent};
use crate::ui::frame::Frame;
use crate::ui::span::Span;
use crate::ui::style::Style;
use crate::views::ViewContext;

const CHAPTER_COUNT: u32 = 114;
/// Surahs that do not open with the bismillah header.
const NO_BISMILLAH: [u32; 2] = [1, 9];

struct Reader {
    chapter: Chapter,
    verses: Vec<Verse>,
    pagination: Pagination,
    loading_more: bool,
}

pub struct QuranView {
    chapters: Vec<Chapter>,
    loading: bool,
    failed: bool,
    search: TextInput,
    searching: bool,
    selected: usize,
    reader: Option<Reader>,
    opening: Option<u32>,
    show_translation: bool,
    reciter_index: usize,
    scroll: usize,
}

impl QuranView {
    pub fn new() -> Self {
        Self {
            chapters: Vec::new(),
            loading: false,
            failed: false,
            search: TextInput::new(),
            searching: false,
            selected: 0,
            reader: None,
            opening: None,
            show_translation: true,
            reciter_index: 0,
            scroll: 0,
        }
    }

    pub fn wants_text_input(&self) -> bool {
        self.searching
    }

    pub fn enter_effects(&mut self) -> Vec<Effect> {
        if self.chapters.is_empty() && !self.loading {
            self.loading = true;
            self.failed = false;
            return vec![Effect::Fetch(FetchRequest::Chapters)];
        }
        Vec::new()
    }

    pub fn refresh_effects(&mut self) -> Vec<Effect> {
        if let Some(reader) = &self.reader {
            return self.open_chapter(reader.chapter.id);
        }
        self.chapters.clear();
        self.enter_effects()
    }

    pub fn handle_key(&mut self, key: KeyEvent, _ctx: &ViewContext<'_>) -> Vec<Effect> {
        if self.searching {
            return self.handle_search_key(key);
        }
        if self.reader.is_some() {
            return self.handle_reader_key(key);
        }
        self.handle_list_key(key)
    }

    pub fn handle_chapters(&mut self, result: Result<Vec<Chapter>, ApiError>) -> Vec<Effect> {
        self.loading = false;
        match result {
            Ok(chapters) => {
                self.chapters = chapters;
                self.selected = 0;
            }
            Err(_) => self.failed = true,
        }
        vec![Effect::RequestRender]
    }

    pub fn handle_chapter_open(
        &mut self,
        chapter_id: u32,
        result: Result<(Chapter, VersesResponse), ApiError>,
    ) -> Vec<Effect> {
        if self.opening != Some(chapter_id) {
            return Vec::new();
        }
        self.opening = None;
        match result {
            Ok((chapter, verses)) => {
                self.reader = Some(Reader {
                    chapter,
                    verses: verses.verses,
                    pagination: verses.pagination,
                    loading_more: false,
                });
                self.scroll = 0;
                self.failed = false;
            }
            Err(_) => self.failed = true,
        }
        vec![Effect::RequestRender]
    }

    pub fn handle_verses(
        &mut self,
        chapter_id: u32,
        result: Result<VersesResponse, ApiError>,
    ) -> Vec<Effect> {
        let Some(reader) = &mut self.reader else {
            return Vec::new();
        };
        if reader.chapter.id != chapter_id {
            return Vec::new();
        }
        reader.loading_more = false;
        if let Ok(mut page) = result {
            reader.verses.append(&mut page.verses);
            reader.pagination = page.pagination;
        }
        vec![Effect::RequestRender]
    }

    pub fn render(&self, ctx: &ViewContext<'_>) -> Frame {
        match &self.reader {
            Some(reader) => self.render_reader(reader, ctx),
            None => self.render_list(ctx),
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) -> Vec<Effect> {
        match key.code {
            KeyCode::Esc => {
                self.searching = false;
                self.search.clear();
                self.selected = 0;
                vec![Effect::RequestRender]
            }
            KeyCode::Enter => {
                self.searching = false;
                vec![Effect::RequestRender]
            }
            _ => {
                if self.search.handle_key(key) {
                    self.selected = 0;
                    vec![Effect::RequestRender]
                } else {
                    Vec::new()
                }
            }
        }
    }

    fn handle_list_key(&mut self, key: KeyEvent) -> Vec<Effect> {
        match key.code {
            KeyCode::Char('/') => {
                self.searching = true;
                vec![Effect::RequestRender]
            }
            KeyCode::Up => {
                if self.selected > 0 {
                    self.selected -= 1;
                    return vec![Effect::RequestRender];
                }
                Vec::new()
            }
            KeyCode::Down => {
                let count = self.filtered().len();
                if count > 0 && self.selected + 1 < count {
                    self.selected += 1;
                    return vec![Effect::RequestRender];
                }
                Vec::new()
            }
            KeyCode::Enter => {
                let Some(chapter) = self.filtered().get(self.selected).copied() else {
                    return Vec::new();
                };
                let id = chapter.id;
                let mut effects = self.open_chapter(id);
                effects.push(Effect::RequestRender);
                effects
            }
            _ => Vec::new(),
        }
    }

    fn handle_reader_key(&mut self, key: KeyEvent) -> Vec<Effect> {
        match key.code {
            KeyCode::Esc => {
                self.reader = None;
                self.scroll = 0;
                vec![Effect::RequestRender]
            }
            KeyCode::Char('t') => {
                // Tracks the reference behavior: the two states load from
                // different endpoints, so the chapter is refetched.
                self.show_translation = !self.show_translation;
                let Some(id) = self.reader.as_ref().map(|r| r.chapter.id) else {
                    return vec![Effect::RequestRender];
                };
                let mut effects = self.open_chapter(id);
                effects.push(Effect::RequestRender);
                effects
            }
            KeyCode::Char('a') => {
                self.reciter_index = (self.reciter_index + 1) % RECITERS.len();
                vec![Effect::RequestRender]
            }
            KeyCode::Char('n') => {
                let translation = self.translation_track();
                let Some(reader) = &mut self.reader else {
                    return Vec::new();
                };
                if reader.loading_more || !reader.pagination.has_more() {
                    return Vec::new();
                }
                reader.loading_more = true;
                vec![
                    Effect::Fetch(FetchRequest::Verses {
                        chapter_id: reader.chapter.id,
                        translation,
                        page: reader.pagination.current_page + 1,
                    }),
                    Effect::RequestRender,
                ]
            }
            KeyCode::Up => {
                if self.scroll > 0 {
                    self.scroll -= 1;
                    return vec![Effect::RequestRender];
                }
                Vec::new()
            }
            KeyCode::Down => {
                let loaded = self.reader.as_ref().map(|r| r.verses.len()).unwrap_or(0);
                if self.scroll + 1 < loaded {
                    self.scroll += 1;
                    return vec![Effect::RequestRender];
                }
                Vec::new()
            }
            KeyCode::Left | KeyCode::Right => {
                let Some(reader) = &self.reader else {
                    return Vec::new();
                };
                let id = reader.chapter.id;
                let target = if key.code == KeyCode::Left {
                    id.checked_sub(1).filter(|t| *t >= 1)
                } else {
                    Some(id + 1).filter(|t| *t <= CHAPTER_COUNT)
                };
                let Some(target) = target else {
                    return Vec::new();
                };
                let mut effects = self.open_chapter(target);
                effects.push(Effect::RequestRender);
                effects
            }
            _ => Vec::new(),
        }
    }

    fn open_chapter(&mut self, chapter_id: u32) -> Vec<Effect> {
        self.opening = Some(chapter_id);
        self.failed = false;
        vec![Effect::Fetch(FetchRequest::ChapterOpen {
            chapter_id,
            translation: self.translation_track(),
        })]
    }

    /// `None` loads the Arabic-only verse endpoint.
    fn translation_track(&self) -> Option<u32> {
        self.show_translation.then_some(DEFAULT_TRANSLATION)
    }

    fn filtered(&self) -> Vec<&Chapter> {
        let query = self.search.value().trim().to_lowercase();
        if query.is_empty() {
            return self.chapters.iter().collect();
        }
        self.chapters
            .iter()
            .filter(|c| {
                c.name_simple.to_lowercase().contains(&query)
                    || c.name_arabic.contains(query.as_str())
                    || c.translated_name.name.to_lowercase().contains(&query)
                    || c.id.to_string() == query
            })
            .collect()
    }

    fn render_list(&self, ctx: &ViewContext<'_>) -> Frame {
        let mut frame = Frame::new();
        frame.push_text(ctx.t("quran.title"), ctx.theme.title);
        frame.push_blank();

        if self.searching {
            frame.push_spans(self.search.render(
                ctx.t("quran.search"),
                true,
                ctx.theme.accent,
                ctx.theme.highlight,
            ));
        } else if !self.search.is_empty() {
            frame.push_text(
                format!("{}: {}", ctx.t("quran.search"), self.search.value()),
                ctx.theme.hint,
            );
        }
        frame.push_blank();

        if self.loading {
            frame.push_text(ctx.t("quran.loading"), ctx.theme.hint);
            return frame;
        }
        if self.failed {
            frame.push_text(ctx.t("quran.fetchError"), ctx.theme.error);
            return frame;
        }

        let filtered = self.filtered();
        if filtered.is_empty() {
            frame.push_text(ctx.t("quran.noResults"), ctx.theme.hint);
            return frame;
        }

        for (i, chapter) in filtered.iter().enumerate() {
            let style = if i == self.selected {
                ctx.theme.highlight
            } else {
                Style::new()
            };
            let line = format!(
                "{:>3}. {:<24} {}  {} {}",
                chapter.id,
                chapter.name_simple,
                chapter.name_arabic,
                chapter.verses_count,
                ctx.t("quran.verses"),
            );
            frame.push_text(line, style);
        }
        frame
    }

    fn render_reader(&self, reader: &Reader, ctx: &ViewContext<'_>) -> Frame {
        let mut frame = Frame::new();
        let chapter = &reader.chapter;
        frame.push_spans(vec![
            Span::styled(chapter.name_arabic.clone(), ctx.theme.arabic),
            Span::new(format!(
                "  {} ({})",
                chapter.name_simple, chapter.translated_name.name
            )),
        ]);
        frame.push_text(
            format!(
                "{} {} · {}",
                chapter.verses_count,
                ctx.t("quran.verses"),
                chapter.revelation_place
            ),
            ctx.theme.hint,
        );
        let reciter = RECITERS[self.reciter_index];
        frame.push_text(
            format!("♪ {} · {}", reciter.name, quran::audio_url(chapter.id, reciter.id)),
            ctx.theme.hint,
        );
        frame.push_blank();

        if self.opening.is_some() {
            frame.push_text(ctx.t("quran.loadingSurah"), ctx.theme.hint);
            return frame;
        }

        if !NO_BISMILLAH.contains(&chapter.id) {
            frame.push_text(ctx.t("quran.bismillah"), ctx.theme.arabic);
            frame.push_blank();
        }

        for verse in reader.verses.iter().skip(self.scroll) {
            frame.push_spans(vec![
                Span::styled(format!("{} ", verse.verse_key), ctx.theme.accent),
                Span::styled(verse.text_uthmani.clone(), ctx.theme.arabic),
            ]);
            if self.show_translation {
                for translation in &verse.translations {
                    frame.push_text(format!("   {}", translation.text), Style::new());
                }
            }
            frame.push_blank();
        }

        if reader.loading_more {
            frame.push_text(ctx.t("quran.loadingSurah"), ctx.theme.hint);
        } else if reader.pagination.has_more() {
            frame.push_text(format!("[n] {}", ctx.t("quran.loadMore")), ctx.theme.hint);
        }
        frame.push_text(
            format!("[Esc] {}", ctx.t("quran.backToSurahs")),
            ctx.theme.hint,
        );
        frame
    }
}

impl Default for QuranView {
    fn default() -> Self {
        Self::new()
    }
}
