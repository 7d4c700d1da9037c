use serde::Serialize;

/// Items per page on every paginated listing.
pub const PAGE_SIZE: usize = 20;

/// Page-based view over an owned list.
#[derive(Debug, Clone)]
pub struct Paginator<T> {
    items: Vec<T>,
    per_page: usize,
}

/// Paginator summary exposed to templates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaginatorInfo {
    pub count: usize,
    pub per_page: usize,
    pub num_pages: usize,
    pub page_range: Vec<usize>,
}

/// One page of items plus navigation helpers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub number: usize,
    pub num_pages: usize,
    pub has_previous: bool,
    pub has_next: bool,
    pub previous_page_number: Option<usize>,
    pub next_page_number: Option<usize>,
    pub object_list: Vec<T>,
}

impl<T: Clone> Paginator<T> {
    pub fn new(items: Vec<T>, per_page: usize) -> Self {
        Self {
            items,
            per_page: per_page.max(1),
        }
    }

    pub fn count(&self) -> usize {
        self.items.len()
    }

    /// Number of pages; an empty list still has one (empty) page.
    pub fn num_pages(&self) -> usize {
        self.items.len().div_ceil(self.per_page).max(1)
    }

    pub fn info(&self) -> PaginatorInfo {
        PaginatorInfo {
            count: self.count(),
            per_page: self.per_page,
            num_pages: self.num_pages(),
            page_range: (1..=self.num_pages()).collect(),
        }
    }

    /// Resolves a raw `page` query parameter without ever failing.
    ///
    /// Missing or non-integer values give the first page; integers outside
    /// `1..=num_pages` give the last page.
    pub fn page_from_param(&self, param: Option<&str>) -> Page<T> {
        let number = match param.map(str::trim).map(str::parse::<i64>) {
            Some(Ok(n)) if n >= 1 && (n as u64) <= self.num_pages() as u64 => n as usize,
            Some(Ok(_)) => self.num_pages(),
            Some(Err(_)) | None => 1,
        };
        self.page(number)
    }

    /// Page `number`, clamped into range.
    pub fn page(&self, number: usize) -> Page<T> {
        let num_pages = self.num_pages();
        let number = number.clamp(1, num_pages);
        let start = (number - 1) * self.per_page;
        let end = (start + self.per_page).min(self.items.len());
        let object_list = self.items.get(start..end).map(<[T]>::to_vec).unwrap_or_default();

        Page {
            number,
            num_pages,
            has_previous: number > 1,
            has_next: number < num_pages,
            previous_page_number: (number > 1).then(|| number - 1),
            next_page_number: (number < num_pages).then(|| number + 1),
            object_list,
        }
    }
}
