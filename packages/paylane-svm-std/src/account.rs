use anchor_lang::prelude::*;
use anchor_lang::solana_program::program::invoke_signed;
use anchor_lang::solana_program::system_instruction;

/// Creates a program-owned account at a PDA exactly once.
///
/// Anyone can transfer lamports to a PDA before the program ever touches it,
/// which makes a plain `create_account` fail. Initialization therefore takes
/// one of two paths: create the account outright, or claim a pre-funded
/// address by topping it up to rent exemption, allocating and assigning it.
/// Either way the account ends up with data written, so a second
/// initialization of the same address always fails. That failure is the
/// primitive enforcing "created at most once" for intents and fill records.
pub trait InitOnce: AccountSerialize + AccountDeserialize + Owner + Space {
    fn init_once<'info>(
        self,
        account: &AccountInfo<'info>,
        payer: &AccountInfo<'info>,
        system_program: &Program<'info, System>,
        signer_seeds: &[&[&[u8]]],
    ) -> Result<()> {
        let owner = Self::owner();
        let space = 8 + Self::INIT_SPACE;
        let rent_minimum = Rent::get()?.minimum_balance(space);

        require!(
            account.data_is_empty() && *account.owner != owner,
            anchor_lang::error::ErrorCode::ConstraintZero
        );

        match account.lamports() {
            0 => create(account, payer, system_program, signer_seeds, &owner, space, rent_minimum)?,
            _ => claim_prefunded(
                account,
                payer,
                system_program,
                signer_seeds,
                &owner,
                space,
                rent_minimum,
            )?,
        }

        self.try_serialize(&mut &mut account.try_borrow_mut_data()?[..])
    }
}

fn create<'info>(
    account: &AccountInfo<'info>,
    payer: &AccountInfo<'info>,
    system_program: &Program<'info, System>,
    signer_seeds: &[&[&[u8]]],
    owner: &Pubkey,
    space: usize,
    rent_minimum: u64,
) -> Result<()> {
    invoke_signed(
        &system_instruction::create_account(
            &payer.key(),
            &account.key(),
            rent_minimum,
            space as u64,
            owner,
        ),
        &[
            payer.to_account_info(),
            account.to_account_info(),
            system_program.to_account_info(),
        ],
        signer_seeds,
    )
    .map_err(Into::into)
}

fn claim_prefunded<'info>(
    account: &AccountInfo<'info>,
    payer: &AccountInfo<'info>,
    system_program: &Program<'info, System>,
    signer_seeds: &[&[&[u8]]],
    owner: &Pubkey,
    space: usize,
    rent_minimum: u64,
) -> Result<()> {
    if let Some(top_up) = rent_minimum
        .checked_sub(account.lamports())
        .filter(|top_up| *top_up > 0)
    {
        invoke_signed(
            &system_instruction::transfer(&payer.key(), &account.key(), top_up),
            &[
                payer.to_account_info(),
                account.to_account_info(),
                system_program.to_account_info(),
            ],
            signer_seeds,
        )?;
    }

    invoke_signed(
        &system_instruction::allocate(&account.key(), space as u64),
        &[account.to_account_info(), system_program.to_account_info()],
        signer_seeds,
    )?;
    invoke_signed(
        &system_instruction::assign(&account.key(), owner),
        &[account.to_account_info(), system_program.to_account_info()],
        signer_seeds,
    )
    .map_err(Into::into)
}
