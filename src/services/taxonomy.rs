//! Taxonomy service: categories, tags, filter facets, and the assembled
//! catalog sidebar.

use mongodb::bson;

use crate::{
    error::AppResult,
    models::taxonomy::{
        Category, CreateCategory, CreateFilterGroup, CreateFilterItem, CreateTag, FilterBlock,
        FilterGroup, FilterItem, FilterOption, Tag, UpdateCategory, UpdateFilterGroup,
        UpdateFilterItem, UpdateTag,
    },
    repository::{parse_object_id, Repository},
    slug::slugify,
};

/// Name of the filter group tags are folded into
const TAGS_GROUP_NAME: &str = "Теги";

#[derive(Clone)]
pub struct TaxonomyService {
    repository: Repository,
}

impl TaxonomyService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    // =========================================================================
    // Categories
    // =========================================================================

    pub async fn list_categories(&self) -> AppResult<Vec<Category>> {
        self.repository.categories.list().await
    }

    pub async fn get_category(&self, id: &str) -> AppResult<Category> {
        self.repository.categories.get(parse_object_id(id)?).await
    }

    pub async fn create_category(&self, data: CreateCategory) -> AppResult<Category> {
        let slug = data.slug.unwrap_or_else(|| slugify(&data.name));
        let category = Category {
            id: None,
            name: data.name,
            slug,
            tag_sort: data.tag_sort.unwrap_or(0),
            is_active: data.is_active.unwrap_or(true),
            seo_title: data.seo_title,
            seo_description: data.seo_description,
            created_at: None,
        };
        self.repository.categories.insert(category).await
    }

    pub async fn update_category(&self, id: &str, data: UpdateCategory) -> AppResult<()> {
        let set = bson::to_document(&data)?;
        self.repository
            .categories
            .update(parse_object_id(id)?, set)
            .await
    }

    pub async fn delete_category(&self, id: &str) -> AppResult<()> {
        self.repository.categories.delete(parse_object_id(id)?).await
    }

    // =========================================================================
    // Tags
    // =========================================================================

    pub async fn list_tags(&self) -> AppResult<Vec<Tag>> {
        self.repository.tags.list().await
    }

    pub async fn get_tag(&self, id: &str) -> AppResult<Tag> {
        self.repository.tags.get(parse_object_id(id)?).await
    }

    pub async fn create_tag(&self, data: CreateTag) -> AppResult<Tag> {
        let slug = data.slug.unwrap_or_else(|| slugify(&data.name));
        let tag = Tag {
            id: None,
            name: data.name,
            slug,
            sort: data.sort.unwrap_or(0),
            is_active: data.is_active.unwrap_or(true),
            created_at: None,
        };
        self.repository.tags.insert(tag).await
    }

    pub async fn update_tag(&self, id: &str, data: UpdateTag) -> AppResult<()> {
        let set = bson::to_document(&data)?;
        self.repository.tags.update(parse_object_id(id)?, set).await
    }

    pub async fn delete_tag(&self, id: &str) -> AppResult<()> {
        self.repository.tags.delete(parse_object_id(id)?).await
    }

    // =========================================================================
    // Filter groups / items
    // =========================================================================

    pub async fn list_filter_groups(&self) -> AppResult<Vec<FilterGroup>> {
        self.repository.filter_groups.list().await
    }

    pub async fn get_filter_group(&self, id: &str) -> AppResult<FilterGroup> {
        self.repository.filter_groups.get(parse_object_id(id)?).await
    }

    pub async fn create_filter_group(&self, data: CreateFilterGroup) -> AppResult<FilterGroup> {
        let slug = data.slug.unwrap_or_else(|| slugify(&data.name));
        let group = FilterGroup {
            id: None,
            name: data.name,
            slug,
            sort: data.sort.unwrap_or(0),
            is_visible: data.is_visible.unwrap_or(true),
            created_at: None,
        };
        self.repository.filter_groups.insert(group).await
    }

    pub async fn update_filter_group(&self, id: &str, data: UpdateFilterGroup) -> AppResult<()> {
        let set = bson::to_document(&data)?;
        self.repository
            .filter_groups
            .update(parse_object_id(id)?, set)
            .await
    }

    pub async fn delete_filter_group(&self, id: &str) -> AppResult<()> {
        self.repository
            .filter_groups
            .delete(parse_object_id(id)?)
            .await
    }

    pub async fn list_filter_items(&self, group: Option<String>) -> AppResult<Vec<FilterItem>> {
        let group = match group {
            Some(id) => Some(parse_object_id(&id)?),
            None => None,
        };
        self.repository.filter_items.list(group).await
    }

    pub async fn get_filter_item(&self, id: &str) -> AppResult<FilterItem> {
        self.repository.filter_items.get(parse_object_id(id)?).await
    }

    pub async fn create_filter_item(&self, data: CreateFilterItem) -> AppResult<FilterItem> {
        let group = parse_object_id(&data.group)?;
        // The owning group must exist
        self.repository.filter_groups.get(group).await?;

        let slug = data.slug.unwrap_or_else(|| slugify(&data.name));
        let item = FilterItem {
            id: None,
            name: data.name,
            slug,
            group,
            sort: data.sort.unwrap_or(0),
            is_visible: data.is_visible.unwrap_or(true),
            created_at: None,
        };
        self.repository.filter_items.insert(item).await
    }

    pub async fn update_filter_item(&self, id: &str, data: UpdateFilterItem) -> AppResult<()> {
        let mut set = bson::to_document(&data)?;
        if let Some(group) = &data.group {
            set.insert("group", parse_object_id(group)?);
        }
        self.repository
            .filter_items
            .update(parse_object_id(id)?, set)
            .await
    }

    pub async fn delete_filter_item(&self, id: &str) -> AppResult<()> {
        self.repository
            .filter_items
            .delete(parse_object_id(id)?)
            .await
    }

    // =========================================================================
    // Sidebar assembly
    // =========================================================================

    /// Assemble the catalog filter sidebar from filter groups, their items,
    /// and the tag collection.
    pub async fn build_filters(&self) -> AppResult<Vec<FilterBlock>> {
        let groups = self.repository.filter_groups.list().await?;
        let items = self.repository.filter_items.list(None).await?;
        let tags = self.repository.tags.list_active().await?;
        Ok(assemble_filter_blocks(groups, items, tags))
    }
}

/// Fold filter groups, items, and tags into the ordered sidebar shape.
///
/// Tags join a group literally named "Теги" when one exists; otherwise a
/// synthetic block is appended. Option counts are always reported as
/// zero; the frontend does not render them.
pub(crate) fn assemble_filter_blocks(
    mut groups: Vec<FilterGroup>,
    mut items: Vec<FilterItem>,
    tags: Vec<Tag>,
) -> Vec<FilterBlock> {
    groups.sort_by_key(|g| g.sort);
    items.sort_by_key(|i| i.sort);

    let mut blocks: Vec<FilterBlock> = groups
        .into_iter()
        .filter(|g| g.is_visible)
        .map(|group| {
            let group_id = group.id;
            let options = items
                .iter()
                .filter(|item| item.is_visible && Some(item.group) == group_id)
                .map(|item| FilterOption {
                    id: item.id.map(|id| id.to_hex()).unwrap_or_default(),
                    title: item.name.clone(),
                    count: 0,
                })
                .collect();
            FilterBlock {
                id: group_id.map(|id| id.to_hex()).unwrap_or_default(),
                title: group.name,
                options,
            }
        })
        .collect();

    let tag_options: Vec<FilterOption> = tags
        .into_iter()
        .filter(|t| t.is_active)
        .map(|tag| FilterOption {
            id: tag.id.map(|id| id.to_hex()).unwrap_or_default(),
            title: tag.name,
            count: 0,
        })
        .collect();

    if tag_options.is_empty() {
        return blocks;
    }

    match blocks.iter_mut().find(|b| b.title == TAGS_GROUP_NAME) {
        Some(block) => block.options.extend(tag_options),
        None => blocks.push(FilterBlock {
            id: "tags".to_string(),
            title: TAGS_GROUP_NAME.to_string(),
            options: tag_options,
        }),
    }

    blocks
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::oid::ObjectId;

    fn group(name: &str, sort: i32, visible: bool) -> FilterGroup {
        FilterGroup {
            id: Some(ObjectId::new()),
            name: name.to_string(),
            slug: crate::slug::slugify(name),
            sort,
            is_visible: visible,
            created_at: None,
        }
    }

    fn item(group: &FilterGroup, name: &str, sort: i32) -> FilterItem {
        FilterItem {
            id: Some(ObjectId::new()),
            name: name.to_string(),
            slug: crate::slug::slugify(name),
            group: group.id.unwrap(),
            sort,
            is_visible: true,
            created_at: None,
        }
    }

    fn tag(name: &str) -> Tag {
        Tag {
            id: Some(ObjectId::new()),
            name: name.to_string(),
            slug: crate::slug::slugify(name),
            sort: 0,
            is_active: true,
            created_at: None,
        }
    }

    #[test]
    fn groups_and_items_sort_ascending() {
        let second = group("Длительность", 2, true);
        let first = group("Формат", 1, true);
        let items = vec![
            item(&first, "Групповые", 2),
            item(&first, "Индивидуальные", 1),
        ];

        let blocks = assemble_filter_blocks(vec![second, first], items, vec![]);
        assert_eq!(blocks[0].title, "Формат");
        assert_eq!(blocks[0].options[0].title, "Индивидуальные");
        assert_eq!(blocks[0].options[1].title, "Групповые");
        assert_eq!(blocks[1].title, "Длительность");
    }

    #[test]
    fn counts_are_always_zero() {
        let g = group("Формат", 1, true);
        let items = vec![item(&g, "Групповые", 1)];
        let blocks = assemble_filter_blocks(vec![g], items, vec![tag("Вечерние")]);
        for block in &blocks {
            for option in &block.options {
                assert_eq!(option.count, 0);
            }
        }
    }

    #[test]
    fn tags_fold_into_existing_tags_group() {
        let g = group("Теги", 1, true);
        let existing = item(&g, "Старый тег", 1);
        let blocks = assemble_filter_blocks(vec![g], vec![existing], vec![tag("Вечерние")]);

        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].options.len(), 2);
        assert_eq!(blocks[0].options[1].title, "Вечерние");
    }

    #[test]
    fn tags_get_synthetic_group_when_none_exists() {
        let g = group("Формат", 1, true);
        let blocks = assemble_filter_blocks(vec![g], vec![], vec![tag("Вечерние")]);

        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[1].id, "tags");
        assert_eq!(blocks[1].title, "Теги");
        assert_eq!(blocks[1].options[0].title, "Вечерние");
    }

    #[test]
    fn hidden_groups_are_dropped() {
        let hidden = group("Скрытая", 1, false);
        let blocks = assemble_filter_blocks(vec![hidden], vec![], vec![]);
        assert!(blocks.is_empty());
    }
}
