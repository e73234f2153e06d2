//! The workspace: every record of every story plus the recycle bin

use crate::StoreError;
use chrono::NaiveDate;
use std::time::{SystemTime, UNIX_EPOCH};
use storyloom_domain::{
    Chapter, ChapterId, Character, CharacterId, CharacterRole, CharacterSketch, Outline,
    OutlineId, OutlinePoint, Relationship, Story, StoryConcept, StoryId, TrashId, TrashItem,
    TrashedRecord,
};
use storyloom_stats::{DailyGoal, WritingLedger};
use tracing::{debug, info};

fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

/// All writing data owned by one user
///
/// Mutation goes through `&mut self`; callers that share a workspace wrap
/// it in their own lock.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Workspace {
    stories: Vec<Story>,
    chapters: Vec<Chapter>,
    characters: Vec<Character>,
    relationships: Vec<Relationship>,
    outlines: Vec<Outline>,
    trash: Vec<TrashItem>,
    ledger: WritingLedger,
    daily_goal: DailyGoal,
}

impl Workspace {
    /// Create an empty workspace
    pub fn new() -> Self {
        Self::default()
    }

    // Stories

    /// Stories, most recently updated first
    pub fn stories(&self) -> Vec<&Story> {
        let mut stories: Vec<_> = self.stories.iter().collect();
        stories.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        stories
    }

    /// Look up a story
    pub fn story(&self, id: StoryId) -> Result<&Story, StoreError> {
        self.stories
            .iter()
            .find(|s| s.id == id)
            .ok_or_else(|| StoreError::not_found("story", id))
    }

    /// Create a story with an empty first chapter
    pub fn create_story(
        &mut self,
        title: impl Into<String>,
        genre: impl Into<String>,
        synopsis: impl Into<String>,
    ) -> StoryId {
        let story = Story::new(title, genre, synopsis, now_millis());
        let id = story.id;
        self.chapters.push(Chapter::new(id, "Chapter 1", 1));
        info!(story = %id, title = %story.title, "Created story");
        self.stories.push(story);
        id
    }

    /// Create a story from a brainstormed concept, including its protagonist
    pub fn create_story_from_concept(&mut self, concept: &StoryConcept, genre: &str) -> StoryId {
        let id = self.create_story(&concept.title, genre, &concept.synopsis);

        let mut hero = Character::new(
            id,
            concept.character_name.trim(),
            CharacterRole::parse(&concept.character_role),
        );
        hero.description = concept.character_desc.clone();
        hero.conflict = concept.character_conflict.clone();
        self.characters.push(hero);
        id
    }

    // Chapters

    /// Chapters of a story in reading order
    pub fn chapters(&self, story: StoryId) -> Vec<&Chapter> {
        let mut chapters: Vec<_> = self.chapters.iter().filter(|c| c.story_id == story).collect();
        chapters.sort_by_key(|c| c.order);
        chapters
    }

    /// Look up a chapter
    pub fn chapter(&self, id: ChapterId) -> Result<&Chapter, StoreError> {
        self.chapters
            .iter()
            .find(|c| c.id == id)
            .ok_or_else(|| StoreError::not_found("chapter", id))
    }

    /// Append an empty "Chapter N" to a story
    pub fn add_chapter(&mut self, story: StoryId) -> Result<ChapterId, StoreError> {
        self.story(story)?;
        let order = self
            .chapters(story)
            .last()
            .map(|c| c.order + 1)
            .unwrap_or(1);
        let chapter = Chapter::new(story, format!("Chapter {}", order), order);
        let id = chapter.id;
        self.chapters.push(chapter);
        self.touch(story);
        Ok(id)
    }

    /// Replace a chapter's content and feed the growth into the ledger
    ///
    /// `title` of `None` keeps the current title; `pov` replaces the
    /// point-of-view character. Returns the characters credited to `today`.
    pub fn save_chapter(
        &mut self,
        id: ChapterId,
        content: impl Into<String>,
        title: Option<&str>,
        pov: Option<CharacterId>,
        today: NaiveDate,
    ) -> Result<u64, StoreError> {
        let content = content.into();
        let chapter = self
            .chapters
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| StoreError::not_found("chapter", id))?;

        let added = self.ledger.record_edit(today, &chapter.content, &content);
        chapter.content = content;
        if let Some(title) = title {
            chapter.title = title.to_string();
        }
        chapter.pov_character_id = pov;
        let story = chapter.story_id;

        self.touch(story);
        debug!(chapter = %id, added, "Saved chapter");
        Ok(added)
    }

    fn touch(&mut self, story: StoryId) {
        if let Some(s) = self.stories.iter_mut().find(|s| s.id == story) {
            s.updated_at = now_millis().max(s.updated_at);
        }
    }

    // Characters

    /// Characters of a story
    pub fn characters(&self, story: StoryId) -> Vec<&Character> {
        self.characters.iter().filter(|c| c.story_id == story).collect()
    }

    /// Look up a character
    pub fn character(&self, id: CharacterId) -> Result<&Character, StoreError> {
        self.characters
            .iter()
            .find(|c| c.id == id)
            .ok_or_else(|| StoreError::not_found("character", id))
    }

    /// Relationships within a story
    pub fn relationships(&self, story: StoryId) -> Vec<&Relationship> {
        self.relationships.iter().filter(|r| r.story_id == story).collect()
    }

    /// Characters of a story matching `query` and `role`, with the
    /// relationships whose two ends both match
    ///
    /// The query is a case-insensitive substring of name, description or
    /// role; an empty query matches everyone.
    pub fn search_characters(
        &self,
        story: StoryId,
        query: &str,
        role: Option<&CharacterRole>,
    ) -> (Vec<&Character>, Vec<&Relationship>) {
        let needle = query.trim().to_lowercase();
        let matches: Vec<&Character> = self
            .characters(story)
            .into_iter()
            .filter(|c| role.is_none_or(|r| &c.role == r))
            .filter(|c| {
                needle.is_empty()
                    || format!("{} {} {}", c.name, c.description, c.role)
                        .to_lowercase()
                        .contains(&needle)
            })
            .collect();

        let found = |id: CharacterId| matches.iter().any(|c| c.id == id);
        let relationships = self
            .relationships(story)
            .into_iter()
            .filter(|r| found(r.source_character_id) && found(r.target_character_id))
            .collect();

        (matches, relationships)
    }

    /// Turn extracted sketches into character sheets
    pub fn add_extracted_characters(
        &mut self,
        story: StoryId,
        sketches: Vec<CharacterSketch>,
    ) -> Result<Vec<CharacterId>, StoreError> {
        self.story(story)?;
        let ids = sketches
            .into_iter()
            .map(|sketch| {
                let character = Character::from_sketch(story, sketch);
                let id = character.id;
                self.characters.push(character);
                id
            })
            .collect::<Vec<_>>();
        info!(story = %story, count = ids.len(), "Added extracted characters");
        Ok(ids)
    }

    /// Insert or update a character and replace the relationships it owns
    ///
    /// Relationships are re-pointed at this character and its story, so the
    /// caller only has to fill in the target and the label.
    pub fn save_character(
        &mut self,
        character: Character,
        relationships: Vec<Relationship>,
    ) -> Result<(), StoreError> {
        self.story(character.story_id)?;
        let id = character.id;
        let story = character.story_id;

        match self.characters.iter_mut().find(|c| c.id == id) {
            Some(existing) => *existing = character,
            None => self.characters.push(character),
        }

        self.relationships.retain(|r| r.source_character_id != id);
        self.relationships
            .extend(relationships.into_iter().map(|r| Relationship {
                source_character_id: id,
                story_id: story,
                ..r
            }));
        Ok(())
    }

    // Outlines

    /// Outlines of a story, oldest first
    pub fn outlines(&self, story: StoryId) -> Vec<&Outline> {
        self.outlines.iter().filter(|o| o.story_id == story).collect()
    }

    /// Save a new outline for a story
    pub fn add_outline(
        &mut self,
        story: StoryId,
        points: Vec<OutlinePoint>,
    ) -> Result<OutlineId, StoreError> {
        self.story(story)?;
        let outline = Outline {
            id: OutlineId::new(),
            story_id: story,
            title: format!("Outline {}", self.outlines(story).len() + 1),
            points,
        };
        let id = outline.id;
        self.outlines.push(outline);
        Ok(id)
    }

    // Statistics

    /// The writing ledger
    pub fn ledger(&self) -> &WritingLedger {
        &self.ledger
    }

    /// Clear the writing ledger
    pub fn reset_stats(&mut self) {
        self.ledger.reset();
    }

    /// The writer's daily goal
    pub fn daily_goal(&self) -> DailyGoal {
        self.daily_goal
    }

    /// Change the daily goal
    pub fn set_daily_goal(&mut self, goal: DailyGoal) {
        self.daily_goal = goal;
    }

    // Recycle bin

    /// Recycle bin entries, most recent first
    pub fn trash(&self) -> Vec<&TrashItem> {
        let mut items: Vec<_> = self.trash.iter().collect();
        items.sort_by(|a, b| b.deleted_at.cmp(&a.deleted_at));
        items
    }

    /// Move a story and its chapters to the recycle bin
    ///
    /// Characters and outlines stay attached to the story id so a restore
    /// brings the whole project back.
    pub fn delete_story(&mut self, id: StoryId) -> Result<TrashId, StoreError> {
        let index = self
            .stories
            .iter()
            .position(|s| s.id == id)
            .ok_or_else(|| StoreError::not_found("story", id))?;
        let story = self.stories.remove(index);

        let (chapters, kept): (Vec<_>, Vec<_>) =
            self.chapters.drain(..).partition(|c| c.story_id == id);
        self.chapters = kept;

        info!(story = %id, "Moved story to trash");
        Ok(self.push_trash(TrashedRecord::Story { story, chapters }))
    }

    /// Move a character, and every relationship touching it, to the recycle bin
    pub fn delete_character(&mut self, id: CharacterId) -> Result<TrashId, StoreError> {
        let index = self
            .characters
            .iter()
            .position(|c| c.id == id)
            .ok_or_else(|| StoreError::not_found("character", id))?;
        let character = self.characters.remove(index);

        let (relationships, kept): (Vec<_>, Vec<_>) =
            self.relationships.drain(..).partition(|r| r.involves(id));
        self.relationships = kept;

        info!(character = %id, "Moved character to trash");
        Ok(self.push_trash(TrashedRecord::Character {
            character,
            relationships,
        }))
    }

    fn push_trash(&mut self, record: TrashedRecord) -> TrashId {
        let item = TrashItem::new(record, now_millis());
        let id = item.id;
        self.trash.push(item);
        id
    }

    fn take_trash(&mut self, id: TrashId) -> Result<TrashItem, StoreError> {
        let index = self
            .trash
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| StoreError::not_found("trash item", id))?;
        Ok(self.trash.remove(index))
    }

    /// Put a deleted record back
    ///
    /// A character needs its story to be live; otherwise the entry stays in
    /// the bin. Relationships come back only when both of their characters
    /// exist.
    pub fn restore(&mut self, id: TrashId) -> Result<(), StoreError> {
        let owner = self.trash.iter().find(|t| t.id == id).and_then(|t| match &t.record {
            TrashedRecord::Character { character, .. } => Some(character.story_id),
            TrashedRecord::Story { .. } => None,
        });
        if let Some(story) = owner {
            self.story(story)?;
        }

        match self.take_trash(id)?.record {
            TrashedRecord::Story { mut story, chapters } => {
                story.updated_at = now_millis();
                self.stories.push(story);
                self.chapters.extend(chapters);
            }
            TrashedRecord::Character {
                character,
                relationships,
            } => {
                self.characters.push(character);
                for relationship in relationships {
                    let source = relationship.source_character_id;
                    let target = relationship.target_character_id;
                    if self.character(source).is_ok() && self.character(target).is_ok() {
                        self.relationships.push(relationship);
                    }
                }
            }
        }
        info!(trash = %id, "Restored from trash");
        Ok(())
    }

    /// Delete a recycle bin entry for good
    ///
    /// Purging a story also drops the characters, relationships and outlines
    /// left attached to it, including its characters already in the bin.
    pub fn purge(&mut self, id: TrashId) -> Result<TrashItem, StoreError> {
        let item = self.take_trash(id)?;
        if let TrashedRecord::Story { story, .. } = &item.record {
            self.drop_story_records(story.id);
        }
        Ok(item)
    }

    /// Purge every recycle bin entry, returning how many were removed
    pub fn empty_trash(&mut self) -> usize {
        let items = std::mem::take(&mut self.trash);
        for item in &items {
            if let TrashedRecord::Story { story, .. } = &item.record {
                self.drop_story_records(story.id);
            }
        }
        info!(count = items.len(), "Emptied trash");
        items.len()
    }

    fn drop_story_records(&mut self, story: StoryId) {
        self.trash.retain(|t| match &t.record {
            TrashedRecord::Character { character, .. } => character.story_id != story,
            TrashedRecord::Story { .. } => true,
        });
        self.characters.retain(|c| c.story_id != story);
        self.relationships.retain(|r| r.story_id != story);
        self.outlines.retain(|o| o.story_id != story);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storyloom_domain::{RelationshipId, TrashKind};

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()
    }

    fn relationship(target: CharacterId, kind: &str) -> Relationship {
        Relationship {
            id: RelationshipId::new(),
            story_id: StoryId::new(),
            source_character_id: CharacterId::new(),
            target_character_id: target,
            kind: kind.to_string(),
            description: String::new(),
        }
    }

    #[test]
    fn test_create_story_has_first_chapter() {
        let mut ws = Workspace::new();
        let story = ws.create_story("Tidewater", "Mystery", "A drowned town");

        let chapters = ws.chapters(story);
        assert_eq!(chapters.len(), 1);
        assert_eq!(chapters[0].title, "Chapter 1");
        assert_eq!(chapters[0].order, 1);
        assert!(chapters[0].content.is_empty());
    }

    #[test]
    fn test_add_chapter_numbers_sequentially() {
        let mut ws = Workspace::new();
        let story = ws.create_story("Tidewater", "", "");
        ws.add_chapter(story).unwrap();
        let third = ws.add_chapter(story).unwrap();

        let chapter = ws.chapter(third).unwrap();
        assert_eq!(chapter.title, "Chapter 3");
        assert_eq!(chapter.order, 3);
    }

    #[test]
    fn test_unknown_ids_are_not_found() {
        let mut ws = Workspace::new();
        assert!(matches!(
            ws.add_chapter(StoryId::new()),
            Err(StoreError::NotFound { kind: "story", .. })
        ));
        assert!(matches!(
            ws.save_chapter(ChapterId::new(), "x", None, None, day()),
            Err(StoreError::NotFound { kind: "chapter", .. })
        ));
        assert!(ws.restore(TrashId::new()).is_err());
        assert!(ws.delete_character(CharacterId::new()).is_err());
    }

    #[test]
    fn test_save_chapter_feeds_ledger() {
        let mut ws = Workspace::new();
        let story = ws.create_story("Tidewater", "", "");
        let chapter = ws.chapters(story)[0].id;

        assert_eq!(ws.save_chapter(chapter, "a".repeat(300), None, None, day()).unwrap(), 300);
        assert_eq!(ws.save_chapter(chapter, "a".repeat(500), None, None, day()).unwrap(), 200);
        assert_eq!(ws.save_chapter(chapter, "a".repeat(100), Some("Opening"), None, day()).unwrap(), 0);

        assert_eq!(ws.ledger().word_count(day()), 500);
        let saved = ws.chapter(chapter).unwrap();
        assert_eq!(saved.title, "Opening");
        assert_eq!(saved.char_count(), 100);
    }

    #[test]
    fn test_save_chapter_touches_story() {
        let mut ws = Workspace::new();
        let story = ws.create_story("Tidewater", "", "");
        ws.stories.iter_mut().for_each(|s| s.updated_at = 0);
        let chapter = ws.chapters(story)[0].id;

        ws.save_chapter(chapter, "text", None, None, day()).unwrap();

        assert!(ws.story(story).unwrap().updated_at > 0);
    }

    #[test]
    fn test_create_story_from_concept() {
        let mut ws = Workspace::new();
        let concept = StoryConcept {
            title: "Salt Lines".to_string(),
            synopsis: "A cartographer maps a drowning city.".to_string(),
            character_name: "Ines".to_string(),
            character_role: "Protagonist".to_string(),
            character_desc: "Precise".to_string(),
            character_conflict: "Duty against love".to_string(),
        };

        let story = ws.create_story_from_concept(&concept, "Fantasy");

        assert_eq!(ws.story(story).unwrap().genre, "Fantasy");
        assert_eq!(ws.chapters(story).len(), 1);
        let hero = ws.characters(story)[0];
        assert_eq!(hero.name, "Ines");
        assert_eq!(hero.role, CharacterRole::Protagonist);
        assert_eq!(hero.conflict, "Duty against love");
    }

    #[test]
    fn test_add_extracted_characters_fills_defaults() {
        let mut ws = Workspace::new();
        let story = ws.create_story("Tidewater", "", "");
        let sketches = vec![
            CharacterSketch {
                name: "Mara".to_string(),
                role: Some("Antagonist".to_string()),
                ..CharacterSketch::default()
            },
            CharacterSketch::default(),
        ];

        let ids = ws.add_extracted_characters(story, sketches).unwrap();

        assert_eq!(ids.len(), 2);
        let second = ws.character(ids[1]).unwrap();
        assert_eq!(second.name, "Unknown");
        assert_eq!(second.role, CharacterRole::Supporting);
    }

    #[test]
    fn test_save_character_replaces_owned_relationships() {
        let mut ws = Workspace::new();
        let story = ws.create_story("Tidewater", "", "");
        let ids = ws
            .add_extracted_characters(
                story,
                vec![
                    CharacterSketch { name: "Mara".into(), ..Default::default() },
                    CharacterSketch { name: "Tobin".into(), ..Default::default() },
                ],
            )
            .unwrap();
        let mara = ws.character(ids[0]).unwrap().clone();
        let tobin = ws.character(ids[1]).unwrap().clone();

        ws.save_character(tobin.clone(), vec![relationship(mara.id, "brother")]).unwrap();
        ws.save_character(mara.clone(), vec![relationship(tobin.id, "rival")]).unwrap();
        ws.save_character(mara.clone(), vec![relationship(tobin.id, "ally")]).unwrap();

        let rels = ws.relationships(story);
        assert_eq!(rels.len(), 2);
        let owned: Vec<_> = rels.iter().filter(|r| r.source_character_id == mara.id).collect();
        assert_eq!(owned.len(), 1);
        assert_eq!(owned[0].kind, "ally");
        assert_eq!(owned[0].story_id, story);
    }

    #[test]
    fn test_delete_character_drops_its_relationships() {
        let mut ws = Workspace::new();
        let story = ws.create_story("Tidewater", "", "");
        let ids = ws
            .add_extracted_characters(
                story,
                vec![
                    CharacterSketch { name: "Mara".into(), ..Default::default() },
                    CharacterSketch { name: "Tobin".into(), ..Default::default() },
                ],
            )
            .unwrap();
        let tobin = ws.character(ids[1]).unwrap().clone();
        ws.save_character(tobin, vec![relationship(ids[0], "brother")]).unwrap();

        let trash = ws.delete_character(ids[0]).unwrap();

        assert!(ws.relationships(story).is_empty());
        assert_eq!(ws.characters(story).len(), 1);
        assert_eq!(ws.trash()[0].kind(), TrashKind::Character);

        ws.restore(trash).unwrap();
        assert_eq!(ws.characters(story).len(), 2);
        assert_eq!(ws.relationships(story).len(), 1);
        assert!(ws.trash().is_empty());
    }

    #[test]
    fn test_delete_and_restore_story() {
        let mut ws = Workspace::new();
        let story = ws.create_story("Tidewater", "", "");
        ws.add_chapter(story).unwrap();

        let trash = ws.delete_story(story).unwrap();
        assert!(ws.story(story).is_err());
        assert!(ws.chapters(story).is_empty());
        assert_eq!(ws.trash()[0].title(), "Tidewater");

        ws.restore(trash).unwrap();
        assert_eq!(ws.chapters(story).len(), 2);
        assert!(ws.trash().is_empty());
    }

    #[test]
    fn test_purge_story_drops_attached_records() {
        let mut ws = Workspace::new();
        let story = ws.create_story("Tidewater", "", "");
        ws.add_extracted_characters(story, vec![CharacterSketch::default()]).unwrap();
        ws.add_outline(story, vec![OutlinePoint::new("Setup", 10, "Calm")]).unwrap();

        let trash = ws.delete_story(story).unwrap();
        let purged = ws.purge(trash).unwrap();

        assert_eq!(purged.kind(), TrashKind::Story);
        assert!(ws.characters(story).is_empty());
        assert!(ws.outlines(story).is_empty());
        assert!(ws.restore(trash).is_err());
    }

    #[test]
    fn test_purged_story_takes_its_trashed_characters() {
        let mut ws = Workspace::new();
        let story = ws.create_story("Tidewater", "", "");
        let ids = ws.add_extracted_characters(story, vec![CharacterSketch::default()]).unwrap();

        let story_trash = ws.delete_story(story).unwrap();
        let character_trash = ws.delete_character(ids[0]).unwrap();
        ws.purge(story_trash).unwrap();

        assert!(ws.trash().is_empty());
        assert!(ws.restore(character_trash).is_err());
        assert!(ws.character(ids[0]).is_err());
    }

    #[test]
    fn test_character_restore_waits_for_its_story() {
        let mut ws = Workspace::new();
        let story = ws.create_story("Tidewater", "", "");
        let ids = ws.add_extracted_characters(story, vec![CharacterSketch::default()]).unwrap();

        let character_trash = ws.delete_character(ids[0]).unwrap();
        let story_trash = ws.delete_story(story).unwrap();

        let err = ws.restore(character_trash).unwrap_err();
        assert!(matches!(err, StoreError::NotFound { kind: "story", .. }));
        assert_eq!(ws.trash().len(), 2);

        ws.restore(story_trash).unwrap();
        ws.restore(character_trash).unwrap();
        assert_eq!(ws.characters(story).len(), 1);
    }

    #[test]
    fn test_search_characters() {
        let mut ws = Workspace::new();
        let story = ws.create_story("Tidewater", "", "");
        let ids = ws
            .add_extracted_characters(
                story,
                vec![
                    CharacterSketch {
                        name: "Mara".into(),
                        role: Some("Protagonist".into()),
                        description: Some("A lighthouse keeper".into()),
                        ..Default::default()
                    },
                    CharacterSketch { name: "Tobin".into(), ..Default::default() },
                    CharacterSketch {
                        name: "Ilse".into(),
                        description: Some("Keeper of the harbor ledger".into()),
                        ..Default::default()
                    },
                ],
            )
            .unwrap();
        let mara = ws.character(ids[0]).unwrap().clone();
        ws.save_character(
            mara,
            vec![relationship(ids[1], "rival"), relationship(ids[2], "mentor")],
        )
        .unwrap();

        let (all, rels) = ws.search_characters(story, "", None);
        assert_eq!(all.len(), 3);
        assert_eq!(rels.len(), 2);

        let (keepers, rels) = ws.search_characters(story, "KEEPER", None);
        let names: Vec<_> = keepers.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Mara", "Ilse"]);
        assert_eq!(rels.len(), 1);
        assert_eq!(rels[0].kind, "mentor");

        let (supporting, rels) =
            ws.search_characters(story, "", Some(&CharacterRole::Supporting));
        assert_eq!(supporting.len(), 2);
        assert!(rels.is_empty());

        let (by_role_text, _) = ws.search_characters(story, "protagonist", None);
        assert_eq!(by_role_text.len(), 1);
    }

    #[test]
    fn test_goal_and_stats_reset() {
        let mut ws = Workspace::new();
        assert_eq!(ws.daily_goal(), DailyGoal::default());
        ws.set_daily_goal(DailyGoal::new(250).unwrap());
        assert_eq!(ws.daily_goal().words(), 250);

        let story = ws.create_story("Tidewater", "", "");
        let chapter = ws.chapters(story)[0].id;
        ws.save_chapter(chapter, "x".repeat(300), None, None, day()).unwrap();
        assert!(ws.ledger().is_goal_met(day(), ws.daily_goal()));

        ws.reset_stats();
        assert!(ws.ledger().is_empty());
        assert_eq!(ws.daily_goal().words(), 250);
    }

    #[test]
    fn test_empty_trash() {
        let mut ws = Workspace::new();
        let a = ws.create_story("A", "", "");
        let b = ws.create_story("B", "", "");
        ws.delete_story(a).unwrap();
        ws.delete_story(b).unwrap();

        assert_eq!(ws.empty_trash(), 2);
        assert!(ws.trash().is_empty());
        assert_eq!(ws.empty_trash(), 0);
    }

    #[test]
    fn test_add_outline_titles() {
        let mut ws = Workspace::new();
        let story = ws.create_story("Tidewater", "", "");
        ws.add_outline(story, vec![]).unwrap();
        let second = ws
            .add_outline(story, vec![OutlinePoint::new("Climax", 90, "Storm")])
            .unwrap();

        let outlines = ws.outlines(story);
        assert_eq!(outlines.len(), 2);
        assert_eq!(outlines[1].id, second);
        assert_eq!(outlines[1].title, "Outline 2");
    }
}
