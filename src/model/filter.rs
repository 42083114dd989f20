//! Route filtering and pagination
//!
//! `FilterState` is a plain value: every transition returns a new state and
//! every filter change puts the offset back on the first page.
//! `RouteFilterView` derives everything the routes screen shows from a
//! dataset and a state. Nothing is cached; derivations are recomputed on
//! every call.

use super::dataset::Dataset;
use super::route::{AirlineId, Route};

/// Rows shown per page
pub const PAGE_SIZE: usize = 25;

/// Current filter selections and pagination offset
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    /// Index of the first row on the current page, always a multiple of the page size
    pub offset: usize,
    /// Selected airline (None means all airlines)
    pub airline: Option<AirlineId>,
    /// Selected airport code (None means all airports)
    pub airport: Option<String>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select an airline and go back to the first page
    pub fn with_airline(&self, airline: Option<AirlineId>) -> Self {
        Self {
            offset: 0,
            airline,
            airport: self.airport.clone(),
        }
    }

    /// Select an airport and go back to the first page
    pub fn with_airport(&self, airport: Option<String>) -> Self {
        Self {
            offset: 0,
            airline: self.airline,
            airport,
        }
    }

    /// Clear both filters and the offset
    pub fn reset(&self) -> Self {
        Self::default()
    }

    /// Whether any filter is active
    pub fn is_filtered(&self) -> bool {
        self.airline.is_some() || self.airport.is_some()
    }

    /// Airline constraint only
    pub fn matches_airline(&self, route: &Route) -> bool {
        self.airline.map_or(true, |id| route.airline_id == id)
    }

    /// Airport constraint only
    pub fn matches_airport(&self, route: &Route) -> bool {
        self.airport
            .as_deref()
            .map_or(true, |code| route.touches(code))
    }

    /// Both constraints
    pub fn matches(&self, route: &Route) -> bool {
        self.matches_airline(route) && self.matches_airport(route)
    }
}

/// One entry of a filter dropdown
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionRow<V> {
    pub label: String,
    pub value: V,
    /// Whether choosing this option would still show at least one route
    pub is_selectable: bool,
}

/// 1-based inclusive row range of the current page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRange {
    pub first: usize,
    pub last: usize,
    pub total: usize,
}

/// Read-only view of a dataset through a filter state
pub struct RouteFilterView<'a> {
    dataset: &'a Dataset,
    state: &'a FilterState,
    page_size: usize,
}

impl<'a> RouteFilterView<'a> {
    /// Create a view; a page size of zero is treated as one
    pub fn new(dataset: &'a Dataset, state: &'a FilterState, page_size: usize) -> Self {
        Self {
            dataset,
            state,
            page_size: page_size.max(1),
        }
    }

    pub fn state(&self) -> &FilterState {
        self.state
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Routes matching both filters, in dataset order
    pub fn filtered_routes(&self) -> Vec<&'a Route> {
        self.dataset
            .routes
            .iter()
            .filter(|route| self.state.matches(route))
            .collect()
    }

    /// Airline options, each selectable if it has a route matching the airport filter
    ///
    /// The airline filter itself is ignored here so the dropdown keeps
    /// offering alternatives to the current airline.
    pub fn selectable_airlines(&self) -> Vec<OptionRow<AirlineId>> {
        self.dataset
            .airlines
            .iter()
            .map(|airline| OptionRow {
                label: airline.name.clone(),
                value: airline.id,
                is_selectable: self.dataset.routes.iter().any(|route| {
                    route.airline_id == airline.id && self.state.matches_airport(route)
                }),
            })
            .collect()
    }

    /// Airport options, each selectable if it has a route matching the airline filter
    pub fn selectable_airports(&self) -> Vec<OptionRow<String>> {
        self.dataset
            .airports
            .iter()
            .map(|airport| OptionRow {
                label: airport.name.clone(),
                value: airport.code.clone(),
                is_selectable: self.dataset.routes.iter().any(|route| {
                    route.touches(&airport.code) && self.state.matches_airline(route)
                }),
            })
            .collect()
    }

    /// Routes on the current page: `[offset, offset + page_size)`
    pub fn page(&self) -> Vec<&'a Route> {
        self.filtered_routes()
            .into_iter()
            .skip(self.state.offset)
            .take(self.page_size)
            .collect()
    }

    pub fn can_go_prev(&self) -> bool {
        self.state.offset >= self.page_size
    }

    pub fn can_go_next(&self) -> bool {
        self.state.offset + self.page_size < self.filtered_routes().len()
    }

    /// State for the next page, or the current state on the last page
    pub fn next_page(&self) -> FilterState {
        if !self.can_go_next() {
            return self.state.clone();
        }
        FilterState {
            offset: self.state.offset + self.page_size,
            ..self.state.clone()
        }
    }

    /// State for the previous page, or the current state on the first page
    pub fn prev_page(&self) -> FilterState {
        if !self.can_go_prev() {
            return self.state.clone();
        }
        FilterState {
            offset: self.state.offset - self.page_size,
            ..self.state.clone()
        }
    }

    /// State for the first page with the same filters
    pub fn first_page(&self) -> FilterState {
        FilterState {
            offset: 0,
            ..self.state.clone()
        }
    }

    /// Rows shown on the current page, or None when nothing matches
    pub fn page_range(&self) -> Option<PageRange> {
        let total = self.filtered_routes().len();
        if total == 0 || self.state.offset >= total {
            return None;
        }
        Some(PageRange {
            first: self.state.offset + 1,
            last: (self.state.offset + self.page_size).min(total),
            total,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::route::{Airline, Airport};

    fn route(airline: AirlineId, src: &str, dest: &str) -> Route {
        Route {
            airline_id: airline,
            source_airport_code: src.to_string(),
            destination_airport_code: dest.to_string(),
        }
    }

    fn airline(id: AirlineId, name: &str) -> Airline {
        Airline {
            id,
            name: name.to_string(),
            logo: None,
        }
    }

    fn airport(code: &str) -> Airport {
        Airport {
            code: code.to_string(),
            name: format!("{} Airport", code),
            lat: None,
            long: None,
        }
    }

    fn two_route_dataset() -> Dataset {
        Dataset::new(
            vec![route(1, "AAA", "BBB"), route(2, "BBB", "CCC")],
            vec![airline(1, "X"), airline(2, "Y")],
            vec![airport("AAA"), airport("BBB"), airport("CCC")],
        )
    }

    fn dataset_with_routes(count: usize) -> Dataset {
        let routes = (0..count)
            .map(|i| route(1, &format!("S{:02}", i), "HUB"))
            .collect();
        Dataset::new(routes, vec![airline(1, "X")], vec![airport("HUB")])
    }

    fn selectable<V: Clone>(rows: &[OptionRow<V>]) -> Vec<V> {
        rows.iter()
            .filter(|row| row.is_selectable)
            .map(|row| row.value.clone())
            .collect()
    }

    #[test]
    fn test_no_filter_shows_every_route() {
        let data = two_route_dataset();
        let state = FilterState::new();
        let view = RouteFilterView::new(&data, &state, PAGE_SIZE);

        let routes: Vec<Route> = view.filtered_routes().into_iter().cloned().collect();
        assert_eq!(routes, data.routes);
    }

    #[test]
    fn test_airline_filter_narrows_routes_and_airports() {
        let data = two_route_dataset();
        let state = FilterState::new().with_airline(Some(1));
        let view = RouteFilterView::new(&data, &state, PAGE_SIZE);

        assert_eq!(view.filtered_routes(), vec![&data.routes[0]]);

        let airports = view.selectable_airports();
        assert_eq!(selectable(&airports), vec!["AAA".to_string(), "BBB".to_string()]);
        assert!(!airports[2].is_selectable);
        assert_eq!(airports[2].value, "CCC");
    }

    #[test]
    fn test_airport_filter_matches_source_or_destination() {
        let data = two_route_dataset();
        let state = FilterState::new().with_airport(Some("BBB".to_string()));
        let view = RouteFilterView::new(&data, &state, PAGE_SIZE);
        assert_eq!(view.filtered_routes().len(), 2);

        let state = FilterState::new().with_airport(Some("CCC".to_string()));
        let view = RouteFilterView::new(&data, &state, PAGE_SIZE);
        assert_eq!(view.filtered_routes(), vec![&data.routes[1]]);
    }

    #[test]
    fn test_both_filters_combine() {
        let data = two_route_dataset();
        let state = FilterState::new()
            .with_airline(Some(2))
            .with_airport(Some("AAA".to_string()));
        let view = RouteFilterView::new(&data, &state, PAGE_SIZE);
        assert!(view.filtered_routes().is_empty());
        assert!(view.page_range().is_none());
    }

    #[test]
    fn test_unknown_filter_values_match_nothing() {
        let data = two_route_dataset();
        let state = FilterState::new().with_airline(Some(42));
        let view = RouteFilterView::new(&data, &state, PAGE_SIZE);
        assert!(view.filtered_routes().is_empty());

        let state = FilterState::new().with_airport(Some("ZZZ".to_string()));
        let view = RouteFilterView::new(&data, &state, PAGE_SIZE);
        assert!(view.filtered_routes().is_empty());
        assert!(!view.can_go_next());
    }

    #[test]
    fn test_filtered_routes_are_always_a_subset() {
        let data = two_route_dataset();
        let airlines = [None, Some(1), Some(2), Some(3)];
        let airports = [None, Some("AAA"), Some("BBB"), Some("CCC"), Some("ZZZ")];

        for airline in airlines {
            for code in airports {
                let state = FilterState::new()
                    .with_airline(airline)
                    .with_airport(code.map(str::to_string));
                let view = RouteFilterView::new(&data, &state, PAGE_SIZE);
                for route in view.filtered_routes() {
                    assert!(data.routes.contains(route));
                    assert!(state.matches(route));
                }
            }
        }
    }

    #[test]
    fn test_airline_options_ignore_the_airline_filter() {
        let data = two_route_dataset();
        let state = FilterState::new().with_airline(Some(1));
        let view = RouteFilterView::new(&data, &state, PAGE_SIZE);
        assert_eq!(selectable(&view.selectable_airlines()), vec![1, 2]);

        let state = FilterState::new()
            .with_airline(Some(1))
            .with_airport(Some("CCC".to_string()));
        let view = RouteFilterView::new(&data, &state, PAGE_SIZE);
        assert_eq!(selectable(&view.selectable_airlines()), vec![2]);
    }

    #[test]
    fn test_airport_options_ignore_the_airport_filter() {
        let data = two_route_dataset();
        let state = FilterState::new().with_airport(Some("AAA".to_string()));
        let view = RouteFilterView::new(&data, &state, PAGE_SIZE);
        assert_eq!(selectable(&view.selectable_airports()).len(), 3);
    }

    #[test]
    fn test_options_without_routes_are_never_selectable() {
        let mut data = two_route_dataset();
        data.airlines.push(airline(3, "Grounded"));
        data.airports.push(airport("DDD"));

        let state = FilterState::new();
        let view = RouteFilterView::new(&data, &state, PAGE_SIZE);
        assert!(!view.selectable_airlines()[2].is_selectable);
        assert!(!view.selectable_airports()[3].is_selectable);
    }

    #[test]
    fn test_option_labels_use_names() {
        let data = two_route_dataset();
        let state = FilterState::new();
        let view = RouteFilterView::new(&data, &state, PAGE_SIZE);
        assert_eq!(view.selectable_airlines()[1].label, "Y");
        assert_eq!(view.selectable_airports()[0].label, "AAA Airport");
    }

    #[test]
    fn test_setting_a_filter_resets_offset() {
        let state = FilterState {
            offset: 50,
            airline: None,
            airport: None,
        };
        assert_eq!(state.with_airline(Some(1)).offset, 0);
        assert_eq!(state.with_airport(Some("BBB".to_string())).offset, 0);
        assert_eq!(state.with_airline(None).offset, 0);
    }

    #[test]
    fn test_setting_one_filter_keeps_the_other() {
        let state = FilterState::new()
            .with_airline(Some(1))
            .with_airport(Some("BBB".to_string()));
        assert_eq!(state.airline, Some(1));
        assert_eq!(state.airport.as_deref(), Some("BBB"));
        assert!(state.is_filtered());
    }

    #[test]
    fn test_reset_is_idempotent() {
        let state = FilterState {
            offset: 25,
            airline: Some(1),
            airport: Some("AAA".to_string()),
        };
        let once = state.reset();
        let twice = once.reset();
        assert_eq!(once, twice);
        assert_eq!(once, FilterState::default());
        assert!(!once.is_filtered());
    }

    #[test]
    fn test_pagination_over_thirty_routes() {
        let data = dataset_with_routes(30);
        let state = FilterState::new();
        let view = RouteFilterView::new(&data, &state, PAGE_SIZE);

        let page = view.page();
        assert_eq!(page.len(), 25);
        assert_eq!(page[0], &data.routes[0]);
        assert_eq!(page[24], &data.routes[24]);
        assert!(!view.can_go_prev());
        assert!(view.can_go_next());
        assert_eq!(
            view.page_range(),
            Some(PageRange {
                first: 1,
                last: 25,
                total: 30
            })
        );

        let state = view.next_page();
        assert_eq!(state.offset, 25);
        let view = RouteFilterView::new(&data, &state, PAGE_SIZE);
        let page = view.page();
        assert_eq!(page.len(), 5);
        assert_eq!(page[0], &data.routes[25]);
        assert_eq!(page[4], &data.routes[29]);
        assert!(!view.can_go_next());
        assert!(view.can_go_prev());
        assert_eq!(
            view.page_range(),
            Some(PageRange {
                first: 26,
                last: 30,
                total: 30
            })
        );
    }

    #[test]
    fn test_navigation_is_guarded_at_both_ends() {
        let data = dataset_with_routes(30);
        let state = FilterState::new();
        let view = RouteFilterView::new(&data, &state, PAGE_SIZE);
        assert_eq!(view.prev_page(), state);

        let last = view.next_page();
        let view = RouteFilterView::new(&data, &last, PAGE_SIZE);
        assert_eq!(view.next_page(), last);
        assert_eq!(view.prev_page().offset, 0);
        assert_eq!(view.first_page().offset, 0);
    }

    #[test]
    fn test_exact_multiple_of_page_size_has_no_empty_trailing_page() {
        let data = dataset_with_routes(50);
        let state = FilterState::new();
        let view = RouteFilterView::new(&data, &state, PAGE_SIZE);
        let second = view.next_page();
        let view = RouteFilterView::new(&data, &second, PAGE_SIZE);
        assert_eq!(view.page().len(), 25);
        assert!(!view.can_go_next());
    }

    #[test]
    fn test_offset_stays_a_multiple_of_page_size() {
        let data = dataset_with_routes(80);
        let mut state = FilterState::new();
        for _ in 0..15 {
            state = RouteFilterView::new(&data, &state, 7).next_page();
            assert_eq!(state.offset % 7, 0);
        }
        assert_eq!(state.offset, 77);
    }

    #[test]
    fn test_offset_past_the_end_yields_an_empty_page() {
        let data = dataset_with_routes(3);
        let state = FilterState {
            offset: 50,
            airline: None,
            airport: None,
        };
        let view = RouteFilterView::new(&data, &state, PAGE_SIZE);
        assert!(view.page().is_empty());
        assert!(view.page_range().is_none());
    }

    #[test]
    fn test_zero_page_size_is_treated_as_one() {
        let data = dataset_with_routes(2);
        let state = FilterState::new();
        let view = RouteFilterView::new(&data, &state, 0);
        assert_eq!(view.page_size(), 1);
        assert_eq!(view.page().len(), 1);
        assert!(view.can_go_next());
    }
}
