//! The business rules for managing categories.

use image::ImageFormat;

use crate::{
    ApiResponse, Error,
    category::{
        Category, CategoryChanges, CategoryId, CategoryName, CategoryQuery, CategoryStore,
        ImageChange, NewCategory, form::CategoryForm,
    },
    pagination::{Page, PaginationConfig},
    storage::BlobStore,
    upload::UploadedFile,
    validation::ValidationErrors,
};

/// The blob collection that category images are stored in.
pub const CATEGORY_IMAGE_COLLECTION: &str = "categories";

/// The largest accepted category image, 2000 KB.
pub const MAX_IMAGE_BYTES: usize = 2000 * 1024;

const LIST_MESSAGE: &str = "List Data Categories";
const CREATED_MESSAGE: &str = "Data Category Berhasil Disimpan!";
const CREATE_FAILED_MESSAGE: &str = "Data Category Gagal Disimpan!";
const DETAIL_MESSAGE: &str = "Detail Data Category!";
const DETAIL_NOT_FOUND_MESSAGE: &str = "Detail Data Category Tidak Ditemukan!";
const UPDATED_MESSAGE: &str = "Data Category Berhasil Diupdate!";
const UPDATE_FAILED_MESSAGE: &str = "Data Category Gagal Diupdate!";
const DELETED_MESSAGE: &str = "Data Category Berhasil Dihapus!";
const DELETE_FAILED_MESSAGE: &str = "Data Category Gagal Dihapus!";

/// The options for listing categories, as sent by the client.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListCategories {
    /// Text to look for in category names. Blank searches list everything.
    pub search: Option<String>,
    /// The 1-based page to show.
    pub page: u64,
}

/// Lists, creates, shows, updates and deletes categories.
///
/// Expected outcomes (not found, nothing written) are reported through the
/// [ApiResponse] envelope. Validation failures are returned as
/// [Error::Validation] and any other error comes from the stores.
#[derive(Debug, Clone)]
pub struct CategoryService<C, B> {
    category_store: C,
    blob_store: B,
    pagination_config: PaginationConfig,
}

impl<C, B> CategoryService<C, B>
where
    C: CategoryStore,
    B: BlobStore,
{
    /// Create a service that keeps records in `category_store` and images in `blob_store`.
    pub fn new(category_store: C, blob_store: B, pagination_config: PaginationConfig) -> Self {
        Self {
            category_store,
            blob_store,
            pagination_config,
        }
    }

    /// The pagination settings used by [CategoryService::list].
    pub fn pagination_config(&self) -> &PaginationConfig {
        &self.pagination_config
    }

    /// Get one page of categories, newest first, optionally filtered by name.
    pub fn list(&self, request: ListCategories) -> Result<ApiResponse<Page<Category>>, Error> {
        let per_page = self.pagination_config.page_size;
        let page = request.page.max(1);
        let search = request
            .search
            .map(|search| search.trim().to_owned())
            .filter(|search| !search.is_empty());

        let query = CategoryQuery {
            search,
            limit: per_page,
            offset: self.pagination_config.offset(page),
        };

        let (total, categories) = self
            .category_store
            .list(&query)
            .inspect_err(|error| tracing::error!("Failed to list categories: {error}"))?;

        Ok(ApiResponse::success(
            LIST_MESSAGE,
            Page::new(categories, page, per_page, total),
        ))
    }

    /// Validate `form` and create a category, storing its image if one was sent.
    pub fn create(&self, form: CategoryForm) -> Result<ApiResponse<Category>, Error> {
        let mut errors = ValidationErrors::new();
        let name = self.validate_name(form.name.as_deref(), None, &mut errors)?;
        if let Some(image) = &form.image {
            validate_image(image, &mut errors);
        }
        errors.into_result()?;
        let name = name.ok_or(Error::EmptyCategoryName)?;

        let image = form
            .image
            .map(|image| self.store_image(&image))
            .transpose()?;

        match self.category_store.create(NewCategory::new(name, image))? {
            Some(category) => {
                tracing::info!("Created category {} ({})", category.id, category.slug);
                Ok(ApiResponse::success(CREATED_MESSAGE, category))
            }
            None => {
                tracing::warn!("The category store did not return the new category");
                Ok(ApiResponse::failure(CREATE_FAILED_MESSAGE))
            }
        }
    }

    /// Get the category with `id`.
    ///
    /// A missing category is a failed envelope rather than an error.
    pub fn get(&self, id: CategoryId) -> Result<ApiResponse<Category>, Error> {
        match self.category_store.get(id) {
            Ok(category) => Ok(ApiResponse::success(DETAIL_MESSAGE, category)),
            Err(Error::NotFound) => Ok(ApiResponse::failure(DETAIL_NOT_FOUND_MESSAGE)),
            Err(error) => Err(error),
        }
    }

    /// Validate `form` and rename the category with `id`, replacing its image
    /// if a new one was sent.
    pub fn update(
        &self,
        id: CategoryId,
        form: CategoryForm,
    ) -> Result<ApiResponse<Category>, Error> {
        let mut errors = ValidationErrors::new();
        let name = self.validate_name(form.name.as_deref(), Some(id), &mut errors)?;
        errors.into_result()?;
        let name = name.ok_or(Error::EmptyCategoryName)?;

        let current = match self.category_store.get(id) {
            Ok(category) => category,
            Err(Error::NotFound) => return Ok(ApiResponse::failure(UPDATE_FAILED_MESSAGE)),
            Err(error) => return Err(error),
        };

        if let Some(image) = &form.image {
            if let Some(old_image) = &current.image {
                self.discard_image(old_image);
            }

            let image = self.store_image(image)?;
            let changes = CategoryChanges::new(name.clone(), ImageChange::Replace(image));
            if let Err(error) = self.category_store.update(id, changes) {
                return update_failure(id, error);
            }
        }

        // The name and slug are written again even when the image branch ran.
        match self
            .category_store
            .update(id, CategoryChanges::new(name, ImageChange::Keep))
        {
            Ok(category) => {
                tracing::info!("Updated category {} ({})", category.id, category.slug);
                Ok(ApiResponse::success(UPDATED_MESSAGE, category))
            }
            Err(error) => update_failure(id, error),
        }
    }

    /// Delete the category with `id` and its image.
    pub fn delete(&self, id: CategoryId) -> Result<ApiResponse<Category>, Error> {
        let category = match self.category_store.get(id) {
            Ok(category) => category,
            Err(Error::NotFound) => return Ok(ApiResponse::failure(DELETE_FAILED_MESSAGE)),
            Err(error) => return Err(error),
        };

        if let Some(image) = &category.image {
            self.discard_image(image);
        }

        match self.category_store.delete(id) {
            Ok(()) => {
                tracing::info!("Deleted category {id}");
                Ok(ApiResponse::success_empty(DELETED_MESSAGE))
            }
            Err(Error::DeleteMissingCategory) => Ok(ApiResponse::failure(DELETE_FAILED_MESSAGE)),
            Err(error) => Err(error),
        }
    }

    /// Check that `raw_name` is present and not used by a category other than `except`.
    ///
    /// Problems are added to `errors`; the name is returned only when it is valid.
    fn validate_name(
        &self,
        raw_name: Option<&str>,
        except: Option<CategoryId>,
        errors: &mut ValidationErrors,
    ) -> Result<Option<CategoryName>, Error> {
        let name = match CategoryName::new(raw_name.unwrap_or_default()) {
            Ok(name) => name,
            Err(_) => {
                errors.add("name", "The name field is required.");
                return Ok(None);
            }
        };

        if self.category_store.name_exists(&name, except)? {
            errors.add("name", "The name has already been taken.");
            return Ok(None);
        }

        Ok(Some(name))
    }

    fn store_image(&self, image: &UploadedFile) -> Result<String, Error> {
        let name = image.hash_name();

        self.blob_store
            .put(CATEGORY_IMAGE_COLLECTION, &name, &image.bytes)
            .inspect_err(|error| tracing::error!("Could not store category image: {error}"))?;

        Ok(name)
    }

    /// Remove an image that is no longer referenced. Failures are only logged.
    fn discard_image(&self, name: &str) {
        if let Err(error) = self.blob_store.delete(CATEGORY_IMAGE_COLLECTION, name) {
            tracing::warn!("Could not delete category image {name:?}: {error}");
        }
    }
}

/// Check the size and type of an uploaded category image.
fn validate_image(image: &UploadedFile, errors: &mut ValidationErrors) {
    match image.image_format() {
        Some(ImageFormat::Jpeg | ImageFormat::Png) => {}
        Some(_) => errors.add("image", "The image must be a file of type: jpeg, jpg, png."),
        None => {
            errors.add("image", "The image must be an image.");
            errors.add("image", "The image must be a file of type: jpeg, jpg, png.");
        }
    }

    if image.size() > MAX_IMAGE_BYTES {
        errors.add("image", "The image must not be greater than 2000 kilobytes.");
    }
}

fn update_failure(id: CategoryId, error: Error) -> Result<ApiResponse<Category>, Error> {
    match error {
        Error::UpdateMissingCategory | Error::DuplicateCategoryName => {
            tracing::warn!("Could not update category {id}: {error}");
            Ok(ApiResponse::failure(UPDATE_FAILED_MESSAGE))
        }
        error => Err(error),
    }
}

#[cfg(test)]
mod category_service_tests {
    use std::sync::{Arc, Mutex};

    use crate::{
        Error,
        category::{
            Category, CategoryChanges, CategoryName, CategoryQuery, CategoryService,
            CategoryStore, NewCategory, SQLiteCategoryStore, db::get_test_store,
            form::CategoryForm, service::ListCategories,
        },
        pagination::PaginationConfig,
        storage::BlobStore,
        upload::{
            UploadedFile,
            test_files::{JPEG_HEADER, file_with_contents, png_file},
        },
    };

    use super::{CATEGORY_IMAGE_COLLECTION, MAX_IMAGE_BYTES};

    #[derive(Debug, Clone, PartialEq)]
    enum BlobCall {
        Put { collection: String, name: String },
        Delete { collection: String, name: String },
    }

    /// Records calls and keeps blobs in memory.
    #[derive(Debug, Clone, Default)]
    struct SpyBlobStore {
        // Use Arc Mutex so that clones of the store share state.
        calls: Arc<Mutex<Vec<BlobCall>>>,
        blobs: Arc<Mutex<Vec<String>>>,
        fail_deletes: bool,
    }

    impl BlobStore for SpyBlobStore {
        fn put(&self, collection: &str, name: &str, _contents: &[u8]) -> Result<(), Error> {
            self.calls.lock().unwrap().push(BlobCall::Put {
                collection: collection.to_owned(),
                name: name.to_owned(),
            });
            self.blobs.lock().unwrap().push(name.to_owned());

            Ok(())
        }

        fn delete(&self, collection: &str, name: &str) -> Result<(), Error> {
            self.calls.lock().unwrap().push(BlobCall::Delete {
                collection: collection.to_owned(),
                name: name.to_owned(),
            });

            if self.fail_deletes {
                return Err(Error::BlobStorage("disk is read-only".to_owned()));
            }

            self.blobs.lock().unwrap().retain(|blob| blob != name);

            Ok(())
        }
    }

    impl SpyBlobStore {
        fn calls(&self) -> Vec<BlobCall> {
            self.calls.lock().unwrap().clone()
        }

        fn blobs(&self) -> Vec<String> {
            self.blobs.lock().unwrap().clone()
        }
    }

    fn get_test_service() -> (CategoryService<SQLiteCategoryStore, SpyBlobStore>, SpyBlobStore) {
        let blob_store = SpyBlobStore::default();
        let service = CategoryService::new(
            get_test_store(),
            blob_store.clone(),
            PaginationConfig::default(),
        );

        (service, blob_store)
    }

    fn form(name: &str, image: Option<UploadedFile>) -> CategoryForm {
        CategoryForm {
            name: Some(name.to_owned()),
            image,
        }
    }

    fn list(search: Option<&str>, page: u64) -> ListCategories {
        ListCategories {
            search: search.map(str::to_owned),
            page,
        }
    }

    #[test]
    fn create_then_get_has_slug_and_no_image() {
        let (service, blob_store) = get_test_service();

        let created = service.create(form("Electronics", None)).unwrap();

        assert!(created.success);
        assert_eq!(created.message, "Data Category Berhasil Disimpan!");
        let category = created.data.unwrap();
        assert_eq!(category.slug, "electronics");
        assert_eq!(category.image, None);
        assert!(blob_store.calls().is_empty());

        let fetched = service.get(category.id).unwrap();
        assert!(fetched.success);
        assert_eq!(fetched.message, "Detail Data Category!");
        assert_eq!(fetched.data, Some(category));
    }

    #[test]
    fn create_stores_image_under_generated_name() {
        let (service, blob_store) = get_test_service();

        let category = service
            .create(form("Sports", Some(png_file("ball.png"))))
            .unwrap()
            .data
            .unwrap();

        let image = category.image.expect("category has no image");
        assert_ne!(image, "ball.png");
        assert!(image.ends_with(".png"));
        assert_eq!(
            blob_store.calls(),
            [BlobCall::Put {
                collection: CATEGORY_IMAGE_COLLECTION.to_owned(),
                name: image,
            }]
        );
    }

    #[test]
    fn create_accepts_jpeg() {
        let (service, _) = get_test_service();
        let file = file_with_contents("photo.jpeg", "image/jpeg", JPEG_HEADER.to_vec());

        let response = service.create(form("Photos", Some(file))).unwrap();

        assert!(response.data.unwrap().image.unwrap().ends_with(".jpg"));
    }

    #[test]
    fn create_requires_name() {
        let (service, _) = get_test_service();

        for name in [None, Some(""), Some("   ")] {
            let result = service.create(CategoryForm {
                name: name.map(str::to_owned),
                image: None,
            });

            let Err(Error::Validation(errors)) = &result else {
                panic!("want validation error for name {name:?}, got {result:?}");
            };
            assert_eq!(errors.get("name"), ["The name field is required."]);
        }
    }

    #[test]
    fn create_with_duplicate_name_fails_validation_and_persists_nothing() {
        let (service, blob_store) = get_test_service();
        service.create(form("Electronics", None)).unwrap();

        let result = service.create(form("Electronics", Some(png_file("a.png"))));

        let Err(Error::Validation(errors)) = &result else {
            panic!("want validation error, got {result:?}");
        };
        assert_eq!(errors.get("name"), ["The name has already been taken."]);
        assert!(blob_store.calls().is_empty());
        assert_eq!(service.list(list(None, 1)).unwrap().data.unwrap().total, 1);
    }

    #[test]
    fn create_with_non_image_fails_validation() {
        let (service, blob_store) = get_test_service();
        let file = file_with_contents("notes.txt", "image/png", b"just some text".to_vec());

        let result = service.create(form("Notes", Some(file)));

        let Err(Error::Validation(errors)) = &result else {
            panic!("want validation error, got {result:?}");
        };
        assert_eq!(
            errors.get("image"),
            [
                "The image must be an image.",
                "The image must be a file of type: jpeg, jpg, png."
            ]
        );
        assert!(errors.get("name").is_empty());
        assert!(blob_store.calls().is_empty());
        assert_eq!(service.list(list(None, 1)).unwrap().data.unwrap().total, 0);
    }

    #[test]
    fn create_with_gif_fails_type_check() {
        let (service, _) = get_test_service();
        let file = file_with_contents("anim.gif", "image/gif", b"GIF89a-frames".to_vec());

        let result = service.create(form("Animations", Some(file)));

        let Err(Error::Validation(errors)) = &result else {
            panic!("want validation error, got {result:?}");
        };
        assert_eq!(
            errors.get("image"),
            ["The image must be a file of type: jpeg, jpg, png."]
        );
    }

    #[test]
    fn create_with_oversized_image_fails_validation() {
        let (service, blob_store) = get_test_service();
        let mut contents = png_file("big.png").bytes.to_vec();
        contents.resize(MAX_IMAGE_BYTES + 1, 0);
        let file = file_with_contents("big.png", "image/png", contents);

        let result = service.create(form("Big", Some(file)));

        let Err(Error::Validation(errors)) = &result else {
            panic!("want validation error, got {result:?}");
        };
        assert_eq!(
            errors.get("image"),
            ["The image must not be greater than 2000 kilobytes."]
        );
        assert!(blob_store.calls().is_empty());
    }

    #[test]
    fn create_accepts_image_at_size_limit() {
        let (service, _) = get_test_service();
        let mut contents = png_file("big.png").bytes.to_vec();
        contents.resize(MAX_IMAGE_BYTES, 0);
        let file = file_with_contents("big.png", "image/png", contents);

        let response = service.create(form("Big", Some(file))).unwrap();

        assert!(response.success);
    }

    #[test]
    fn get_missing_category_is_soft_not_found() {
        let (service, _) = get_test_service();

        let response = service.get(42).unwrap();

        assert!(!response.success);
        assert_eq!(response.message, "Detail Data Category Tidak Ditemukan!");
        assert_eq!(response.data, None);
    }

    #[test]
    fn update_recomputes_slug() {
        let (service, _) = get_test_service();
        let category = service
            .create(form("Electronics", None))
            .unwrap()
            .data
            .unwrap();

        let response = service
            .update(category.id, form("Electronics & Gadgets", None))
            .unwrap();

        assert!(response.success);
        assert_eq!(response.message, "Data Category Berhasil Diupdate!");
        let updated = response.data.unwrap();
        assert_eq!(updated.name.as_ref(), "Electronics & Gadgets");
        assert_eq!(updated.slug, "electronics-gadgets");
        assert_eq!(updated.image, None);
    }

    #[test]
    fn update_to_own_name_succeeds() {
        let (service, _) = get_test_service();
        let category = service.create(form("Sports", None)).unwrap().data.unwrap();

        let response = service.update(category.id, form("Sports", None)).unwrap();

        assert!(response.success);
    }

    #[test]
    fn update_to_other_categorys_name_fails_validation() {
        let (service, _) = get_test_service();
        service.create(form("Sports", None)).unwrap();
        let category = service.create(form("Music", None)).unwrap().data.unwrap();

        let result = service.update(category.id, form("Sports", None));

        let Err(Error::Validation(errors)) = &result else {
            panic!("want validation error, got {result:?}");
        };
        assert_eq!(errors.get("name"), ["The name has already been taken."]);
        assert_eq!(
            service.get(category.id).unwrap().data.unwrap().name.as_ref(),
            "Music"
        );
    }

    #[test]
    fn update_without_name_fails_validation() {
        let (service, _) = get_test_service();
        let category = service.create(form("Sports", None)).unwrap().data.unwrap();

        let result = service.update(category.id, form("", None));

        assert!(matches!(result, Err(Error::Validation(_))));
    }

    #[test]
    fn update_replaces_image_and_deletes_old_one() {
        let (service, blob_store) = get_test_service();
        let category = service
            .create(form("Sports", Some(png_file("old.png"))))
            .unwrap()
            .data
            .unwrap();
        let old_image = category.image.clone().unwrap();

        let updated = service
            .update(category.id, form("Sports", Some(png_file("new.png"))))
            .unwrap()
            .data
            .unwrap();

        let new_image = updated.image.expect("updated category has no image");
        assert_ne!(new_image, old_image);
        assert_eq!(blob_store.blobs(), [new_image.clone()]);
        assert_eq!(
            blob_store.calls()[1..],
            [
                BlobCall::Delete {
                    collection: CATEGORY_IMAGE_COLLECTION.to_owned(),
                    name: old_image,
                },
                BlobCall::Put {
                    collection: CATEGORY_IMAGE_COLLECTION.to_owned(),
                    name: new_image,
                },
            ]
        );
    }

    #[test]
    fn update_without_image_keeps_existing_image() {
        let (service, blob_store) = get_test_service();
        let category = service
            .create(form("Sports", Some(png_file("old.png"))))
            .unwrap()
            .data
            .unwrap();

        let updated = service
            .update(category.id, form("Athletics", None))
            .unwrap()
            .data
            .unwrap();

        assert_eq!(updated.image, category.image);
        assert_eq!(blob_store.calls().len(), 1);
    }

    #[test]
    fn update_adds_image_to_category_without_one() {
        let (service, blob_store) = get_test_service();
        let category = service.create(form("Sports", None)).unwrap().data.unwrap();

        let updated = service
            .update(category.id, form("Sports", Some(png_file("new.png"))))
            .unwrap()
            .data
            .unwrap();

        assert!(updated.image.is_some());
        assert!(
            !blob_store
                .calls()
                .iter()
                .any(|call| matches!(call, BlobCall::Delete { .. }))
        );
    }

    #[test]
    fn update_tolerates_failed_image_deletion() {
        let blob_store = SpyBlobStore {
            fail_deletes: true,
            ..Default::default()
        };
        let service =
            CategoryService::new(get_test_store(), blob_store, PaginationConfig::default());
        let category = service
            .create(form("Sports", Some(png_file("old.png"))))
            .unwrap()
            .data
            .unwrap();

        let response = service
            .update(category.id, form("Sports", Some(png_file("new.png"))))
            .unwrap();

        assert!(response.success);
        assert_ne!(response.data.unwrap().image, category.image);
    }

    #[test]
    fn update_missing_category_fails() {
        let (service, blob_store) = get_test_service();

        let response = service
            .update(42, form("Ghost", Some(png_file("ghost.png"))))
            .unwrap();

        assert!(!response.success);
        assert_eq!(response.message, "Data Category Gagal Diupdate!");
        assert!(blob_store.calls().is_empty());
    }

    #[test]
    fn delete_removes_category_and_image() {
        let (service, blob_store) = get_test_service();
        let category = service
            .create(form("Electronics", Some(png_file("tv.png"))))
            .unwrap()
            .data
            .unwrap();

        let response = service.delete(category.id).unwrap();

        assert!(response.success);
        assert_eq!(response.message, "Data Category Berhasil Dihapus!");
        assert_eq!(response.data, None);
        assert!(blob_store.blobs().is_empty());
        assert!(!service.get(category.id).unwrap().success);
    }

    #[test]
    fn delete_category_without_image_skips_blob_store() {
        let (service, blob_store) = get_test_service();
        let category = service.create(form("Plain", None)).unwrap().data.unwrap();

        let response = service.delete(category.id).unwrap();

        assert!(response.success);
        assert!(blob_store.calls().is_empty());
    }

    #[test]
    fn delete_tolerates_failed_image_deletion() {
        let blob_store = SpyBlobStore {
            fail_deletes: true,
            ..Default::default()
        };
        let service =
            CategoryService::new(get_test_store(), blob_store, PaginationConfig::default());
        let category = service
            .create(form("Sports", Some(png_file("old.png"))))
            .unwrap()
            .data
            .unwrap();

        let response = service.delete(category.id).unwrap();

        assert!(response.success);
    }

    #[test]
    fn delete_missing_category_fails() {
        let (service, _) = get_test_service();

        let response = service.delete(42).unwrap();

        assert!(!response.success);
        assert_eq!(response.message, "Data Category Gagal Dihapus!");
    }

    #[test]
    fn electronics_lifecycle() {
        let (service, _) = get_test_service();

        let created = service
            .create(form("Electronics", None))
            .unwrap()
            .data
            .unwrap();
        assert_eq!(created.slug, "electronics");
        assert_eq!(created.image, None);

        let updated = service
            .update(created.id, form("Electronics & Gadgets", None))
            .unwrap()
            .data
            .unwrap();
        assert_eq!(updated.slug, "electronics-gadgets");

        assert!(service.delete(created.id).unwrap().success);
        assert!(!service.get(created.id).unwrap().success);
    }

    #[test]
    fn list_filters_and_pages_newest_first() {
        let (service, _) = get_test_service();
        for i in 1..=7 {
            service.create(form(&format!("Food {i}"), None)).unwrap();
        }
        service.create(form("Sports", None)).unwrap();

        let first_page = service.list(list(Some("FOO"), 1)).unwrap();
        let second_page = service.list(list(Some("foo"), 2)).unwrap();

        assert!(first_page.success);
        assert_eq!(first_page.message, "List Data Categories");
        let first_page = first_page.data.unwrap();
        assert_eq!(first_page.total, 7);
        assert_eq!(first_page.per_page, 5);
        assert_eq!(first_page.last_page, 2);
        let names: Vec<_> = first_page
            .data
            .iter()
            .map(|category| category.name.to_string())
            .collect();
        assert_eq!(names, ["Food 7", "Food 6", "Food 5", "Food 4", "Food 3"]);

        let second_page = second_page.data.unwrap();
        assert_eq!(second_page.data.len(), 2);
        assert_eq!(second_page.current_page, 2);
    }

    #[test]
    fn list_with_blank_search_lists_everything() {
        let (service, _) = get_test_service();
        service.create(form("Sports", None)).unwrap();
        service.create(form("Music", None)).unwrap();

        let page = service.list(list(Some("  "), 1)).unwrap().data.unwrap();

        assert_eq!(page.total, 2);
    }

    #[test]
    fn list_treats_page_zero_as_first_page() {
        let (service, _) = get_test_service();
        service.create(form("Sports", None)).unwrap();

        let page = service.list(list(None, 0)).unwrap().data.unwrap();

        assert_eq!(page.current_page, 1);
        assert_eq!(page.data.len(), 1);
    }

    #[test]
    fn create_reports_failure_when_store_returns_nothing() {
        let (service, _) = get_test_service();
        // Take the name behind the service's back, as a concurrent request would.
        service
            .category_store
            .create(NewCategory::new(CategoryName::new_unchecked("Raced"), None))
            .unwrap();
        let store = service.category_store.clone();
        let racing_service = CategoryService::new(
            RacingStore(store),
            SpyBlobStore::default(),
            PaginationConfig::default(),
        );

        let response = racing_service.create(form("Raced", None)).unwrap();

        assert!(!response.success);
        assert_eq!(response.message, "Data Category Gagal Disimpan!");
    }

    /// A store whose uniqueness check always passes, so that validation lets
    /// a duplicate name through to [CategoryStore::create].
    #[derive(Debug, Clone)]
    struct RacingStore(SQLiteCategoryStore);

    impl CategoryStore for RacingStore {
        fn create(&self, category: NewCategory) -> Result<Option<Category>, Error> {
            self.0.create(category)
        }

        fn get(&self, id: i64) -> Result<Category, Error> {
            self.0.get(id)
        }

        fn update(&self, id: i64, changes: CategoryChanges) -> Result<Category, Error> {
            self.0.update(id, changes)
        }

        fn delete(&self, id: i64) -> Result<(), Error> {
            self.0.delete(id)
        }

        fn list(&self, query: &CategoryQuery) -> Result<(u64, Vec<Category>), Error> {
            self.0.list(query)
        }

        fn name_exists(&self, _name: &CategoryName, _except: Option<i64>) -> Result<bool, Error> {
            Ok(false)
        }
    }
}
