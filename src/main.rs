fn main() -> Result<(), Box<dyn std::error::Error>> {
    fractal_profile::profile_controller()
}
