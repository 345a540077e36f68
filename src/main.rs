fn main() {
    zombie_horde::game::run();
}
