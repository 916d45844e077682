use seating::{
    AdjacentNeighbors, Error, NeighborCounter, Seat, SeatMap, SeatingAutomaton, VisibleNeighbors,
};

const EXAMPLE: &str = include_str!("../example.txt");

fn example() -> SeatMap {
    EXAMPLE.parse().unwrap()
}

fn map(layout: &str) -> SeatMap {
    layout.parse().unwrap()
}

#[test]
fn adjacent_settles_on_example() {
    let automaton = SeatingAutomaton::adjacent();

    assert_eq!(automaton.run(&example()), Ok(37));

    let settled = automaton.settle(example()).unwrap();
    assert_eq!(settled.rounds, 6);
    assert_eq!(
        settled.map,
        map("\
#.#L.L#.##
#LLL#LL.L#
L.#.L..#..
#L##.##.L#
#.#L.LL.LL
#.#L#L#.##
..L.L.....
#L#L##L#L#
#.LLLLLL.L
#.#L#L#.##
")
    );
}

#[test]
fn visible_settles_on_example() {
    let automaton = SeatingAutomaton::visible();

    assert_eq!(automaton.run(&example()), Ok(26));

    let settled = automaton.settle(example()).unwrap();
    assert_eq!(settled.rounds, 7);
    assert_eq!(
        settled.map,
        map("\
#.L#.L#.L#
#LLLLLL.LL
L.L.L..#..
##L#.#L.L#
L.L#.LL.L#
#.LLLL#.LL
..#.L.....
LLL###LLL#
#.LLLLL#.L
#.L#LL#.L#
")
    );
}

#[test]
fn adjacent_first_rounds_match_example() {
    let automaton = SeatingAutomaton::adjacent();
    let round1 = automaton.step(&example());
    assert_eq!(round1, map(&EXAMPLE.replace('L', "#")));

    let round2 = automaton.step(&round1);
    assert_eq!(
        round2,
        map("\
#.LL.L#.##
#LLLLLL.L#
L.L.L..L..
#LLL.LL.L#
#.LL.LL.LL
#.LLLL#.##
..L.L.....
#LLLLLLLL#
#.LLLLLL.L
#.#LLLL.##
")
    );
}

#[test]
fn visible_second_round_matches_example() {
    let automaton = SeatingAutomaton::visible();
    let round2 = automaton.step(&automaton.step(&example()));

    assert_eq!(
        round2,
        map("\
#.LL.LL.L#
#LLLLLL.LL
L.L.L..L..
LLLL.LL.LL
L.LL.LL.LL
L.LLLLL.LL
..L.L.....
LLLLLLLLL#
#.LLLLLL.L
#.LLLLL.L#
")
    );
}

#[test]
fn settled_layout_is_a_fixed_point() {
    let adjacent = SeatingAutomaton::adjacent();
    let settled = adjacent.settle(example()).unwrap();
    assert_eq!(adjacent.step(&settled.map), settled.map);

    let visible = SeatingAutomaton::visible();
    let settled = visible.settle(example()).unwrap();
    assert_eq!(visible.step(&settled.map), settled.map);
}

#[test]
fn floor_never_changes() {
    let automaton = SeatingAutomaton::visible();
    let mut sm = example();
    for _ in 0..8 {
        let next = automaton.step(&sm);
        for pos in sm.positions() {
            assert_eq!(
                sm.seat(&pos) == Some(Seat::Floor),
                next.seat(&pos) == Some(Seat::Floor)
            );
        }
        sm = next;
    }
}

fn assert_round_is_simultaneous<N: NeighborCounter>(counter: N, automaton: &SeatingAutomaton<N>) {
    let mut sm = example();
    for _ in 0..4 {
        let next = automaton.step(&sm);
        // Visit seats backwards, each decided from the old layout only.
        let positions = sm.positions().collect::<Vec<_>>();
        for pos in positions.iter().rev() {
            let seat = sm.seat(pos).unwrap();
            let expect = automaton.next_seat(seat, counter.count(&sm, pos));
            assert_eq!(next.seat(pos), Some(expect), "seat at {}", pos);
        }
        sm = next;
    }
}

#[test]
fn round_decides_every_seat_from_previous_layout() {
    assert_round_is_simultaneous(AdjacentNeighbors, &SeatingAutomaton::adjacent());
    assert_round_is_simultaneous(VisibleNeighbors, &SeatingAutomaton::visible());
}

#[test]
fn neighbor_counts_cover_every_seat() {
    let automaton = SeatingAutomaton::adjacent();
    let round1 = automaton.step(&example());
    let counts = automaton.neighbor_counts(&round1);

    assert_eq!(counts.len(), round1.row_n() * round1.col_n());
    assert_eq!(counts[0], 2);
    assert_eq!(counts[11], 6);
}

#[test]
fn transition_rule_follows_threshold() {
    let automaton = SeatingAutomaton::new(AdjacentNeighbors, 4);

    assert_eq!(automaton.next_seat(Seat::Floor, 0), Seat::Floor);
    assert_eq!(automaton.next_seat(Seat::Floor, 8), Seat::Floor);
    assert_eq!(automaton.next_seat(Seat::Empty, 0), Seat::Occupied);
    assert_eq!(automaton.next_seat(Seat::Empty, 1), Seat::Empty);
    assert_eq!(automaton.next_seat(Seat::Occupied, 3), Seat::Occupied);
    assert_eq!(automaton.next_seat(Seat::Occupied, 4), Seat::Empty);
}

#[test]
fn floor_only_layout_settles_at_first_round() {
    let settled = SeatingAutomaton::adjacent().settle(map("...\n...\n")).unwrap();

    assert_eq!(settled.rounds, 1);
    assert_eq!(settled.occupied, 0);
}

#[test]
fn lonely_seat_settles_at_second_round() {
    let settled = SeatingAutomaton::visible().settle(map(".L.\n")).unwrap();

    assert_eq!(settled.rounds, 2);
    assert_eq!(settled.occupied, 1);
}

#[test]
fn single_occupied_seat_counts_from_zero_before_first_round() {
    let settled = SeatingAutomaton::adjacent().settle(map("#\n")).unwrap();

    assert_eq!(settled.rounds, 2);
    assert_eq!(settled.occupied, 1);
}

#[test]
fn steady_occupied_count_ends_rounds_even_if_seats_swap() {
    let automaton = SeatingAutomaton::new(AdjacentNeighbors, 1);
    let settled = automaton.settle(map("##.LL\n")).unwrap();

    assert_eq!(settled.rounds, 2);
    assert_eq!(settled.occupied, 2);
    assert_eq!(settled.map, map("##.LL\n"));

    let next = automaton.step(&settled.map);
    assert_eq!(next, map("LL.##\n"));
    assert_ne!(next, settled.map);
}

#[test]
fn round_bound_reports_not_stabilized() {
    let automaton = SeatingAutomaton::adjacent().with_max_rounds(5);
    assert_eq!(automaton.run(&example()), Err(Error::NotStabilized(5)));

    let automaton = SeatingAutomaton::adjacent().with_max_rounds(6);
    assert_eq!(automaton.run(&example()), Ok(37));
}

#[test]
fn presets_carry_reference_parameters() {
    let adjacent = SeatingAutomaton::adjacent();
    assert_eq!(adjacent.occupied_threshold(), 4);
    assert_eq!(adjacent.max_rounds(), seating::DEFAULT_MAX_ROUNDS);

    let visible = SeatingAutomaton::visible();
    assert_eq!(visible.occupied_threshold(), 5);
    assert_eq!(visible.max_rounds(), 100);
}

#[test]
#[should_panic(expected = "occupied threshold must be at least 1")]
fn zero_threshold_is_rejected() {
    SeatingAutomaton::new(VisibleNeighbors, 0);
}
